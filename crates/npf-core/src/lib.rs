//! State store, NPF formula and form view model for the NPF calculator.

pub mod exposure;
pub mod form;
pub mod observer;
pub mod store;

pub use exposure::{ExposureEstimate, FULL_FRAME_WIDTH_MM, NotComputable};
pub use form::{
    ChoiceOption, Control, Dropdown, FORM_TITLE, FormView, NumericInput, REFERENCE_TITLE,
    REFERENCE_URL, SliderSpec,
};
pub use observer::log_snapshot;
pub use store::{StateStore, Subscription, SubscriptionId};
