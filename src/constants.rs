pub mod header {
    pub const ORIGIN: &str = "Origin";
}

pub mod route {
    /// REST namespace owned by the Contact Form 7 plugin.
    pub const CONTACT_FORM_7: &str = "/contact-form-7/v1/";
}

pub mod rejection {
    pub const STATUS_CODE: u16 = 403;
    pub const STATUS: &str = "blocked";
    pub const MESSAGE: &str = "Invalid request origin";
}

pub mod notice {
    pub const FORM_PLUGIN_REQUIRED: &str =
        "This plugin requires Contact Form 7 to be installed and activated.";
}
