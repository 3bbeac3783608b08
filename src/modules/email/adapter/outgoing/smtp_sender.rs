use crate::config::SmtpSettings;
use crate::email::application::ports::outgoing::email_sender::{EmailSender, EmailSenderError};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Authenticated STARTTLS relay.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailSenderError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSenderError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    pub fn from_settings(
        settings: &SmtpSettings,
        from_email: &str,
    ) -> Result<Self, EmailSenderError> {
        match settings {
            SmtpSettings::Local { host, port } => Ok(Self::new_local(host, *port, from_email)),
            SmtpSettings::Relay {
                server,
                username,
                password,
            } => Self::new(server, username, password, from_email),
        }
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox, EmailSenderError> {
        address
            .parse()
            .map_err(|e| EmailSenderError::InvalidAddress(format!("{address}: {e}")))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailSenderError> {
        let email = Message::builder()
            .from(Self::parse_mailbox(&self.from_email)?)
            .to(Self::parse_mailbox(to)?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| EmailSenderError::BuildFailed(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(EmailSenderError::Transport)?;

        tracing::debug!(to, subject, "Email sent");
        Ok(())
    }
}
