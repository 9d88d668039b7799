use crate::common::*;

#[doc = "A fully composed HTML email, handed to the SMTP repository as is."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct EmailMessage {
    from: String,
    to: String,
    subject: String,
    html_body: String,
}
