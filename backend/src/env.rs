pub const ENV_MAIL_API_KEY: &str = "MAIL_API_KEY";
pub const ENV_MAIL_FROM: &str = "MAIL_FROM_ADDRESS";
pub const ENV_MAIL_TO: &str = "MAIL_TO_ADDRESS";
pub const ENV_WAITLIST_INBOX: &str = "WAITLIST_NOTIFICATION_EMAIL";
