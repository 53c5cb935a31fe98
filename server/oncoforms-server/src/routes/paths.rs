//! Route path constants

pub mod health {
    pub const HEALTH: &str = "/health";
    pub const TEST_CONNECTION: &str = "/test-connection";
}

pub mod forms {
    pub const SUBMIT_ASSESSMENT: &str = "/submit-assessment";
    pub const SUBMIT_CONSENT: &str = "/submit-consent";
    pub const SUBMIT_CTSIMULATION: &str = "/submit-ctsimulation";
    pub const SUBMIT_FORM: &str = "/submit-form";
    pub const GET_FORMS: &str = "/get-forms/:form_type";
}
