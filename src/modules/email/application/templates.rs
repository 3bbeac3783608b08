//! HTML bodies for every transactional email the API sends.

const BRAND: &str = "Premier Deals";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Fields of a contact form submission, as shown to staff.
#[derive(Debug, Clone, Copy)]
pub struct ContactDetails<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub subject: &'a str,
    pub message: &'a str,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn button(href: &str, label: &str, color: &str) -> String {
    format!(
        r#"<div style="text-align: center; margin: 30px 0;">
  <a href="{href}" style="background: {color}; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; display: inline-block;">{label}</a>
</div>"#
    )
}

fn layout(title: &str, heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
  </head>
  <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
      <div style="text-align: center; margin-bottom: 30px;">
        <h1 style="color: #2563eb; margin: 0;">{BRAND}</h1>
        <p style="color: #666; margin: 10px 0;">Professional Real Estate Solutions</p>
      </div>
      <div style="background: #f8fafc; padding: 30px; border-radius: 8px;">
        <h2 style="color: #1f2937; margin-top: 0;">{heading}</h2>
        {body}
        <hr style="border: none; border-top: 1px solid #e5e7eb; margin: 30px 0;">
        <p style="color: #666; font-size: 14px;">Best regards,<br>The {BRAND} Team</p>
      </div>
    </div>
  </body>
</html>"#
    )
}

pub fn verification_email(app_url: &str, name: &str, token: &str) -> EmailContent {
    let url = format!("{app_url}/verify?token={token}");
    let body = format!(
        r#"<p>Hi {name},</p>
<p>Thank you for registering with {BRAND}. To complete your registration, please verify your email address by clicking the button below:</p>
{button}
<p>If the button doesn't work, you can copy and paste this link into your browser:</p>
<p style="word-break: break-all; color: #666; font-size: 14px;">{url}</p>
<p>This verification link will expire in 24 hours.</p>
<p>If you didn't create an account with {BRAND}, you can safely ignore this email.</p>"#,
        name = escape_html(name),
        button = button(&url, "Verify Email Address", "#2563eb"),
    );

    EmailContent {
        subject: format!("Verify your email - {BRAND}"),
        html: layout("Verify your email", &format!("Welcome to {BRAND}!"), &body),
    }
}

pub fn welcome_email(app_url: &str, name: &str) -> EmailContent {
    let body = format!(
        r#"<p>Hi {name},</p>
<p>Thank you for verifying your email address! Your account is now active and you can start exploring our premium real estate listings.</p>
{button}
<ul style="color: #4b5563;">
  <li>Browse our property listings</li>
  <li>Contact property owners and agents</li>
  <li>Get notified about new listings</li>
</ul>"#,
        name = escape_html(name),
        button = button(&format!("{app_url}/properties"), "Browse Properties", "#2563eb"),
    );

    EmailContent {
        subject: format!("Welcome to {BRAND}!"),
        html: layout(
            &format!("Welcome to {BRAND}"),
            &format!("Welcome to {BRAND}!"),
            &body,
        ),
    }
}

pub fn password_reset_email(app_url: &str, name: &str, token: &str) -> EmailContent {
    let url = format!("{app_url}/reset-password?token={token}");
    let body = format!(
        r#"<p>Hi {name},</p>
<p>We received a request to reset your password for your {BRAND} account. Click the button below to create a new password:</p>
{button}
<p>If the button doesn't work, you can copy and paste this link into your browser:</p>
<p style="word-break: break-all; color: #666; font-size: 14px;">{url}</p>
<p>This password reset link will expire in 1 hour.</p>
<p>If you didn't request a password reset, you can safely ignore this email. Your password will remain unchanged.</p>"#,
        name = escape_html(name),
        button = button(&url, "Reset Password", "#dc2626"),
    );

    EmailContent {
        subject: format!("Reset your password - {BRAND}"),
        html: layout("Reset your password", "Reset Your Password", &body),
    }
}

pub fn contact_admin_email(details: &ContactDetails<'_>) -> EmailContent {
    let phone = details
        .phone
        .map(escape_html)
        .unwrap_or_else(|| "Not provided".to_string());
    let body = format!(
        r#"<p>A new message was submitted through the contact form.</p>
<table style="width: 100%; border-collapse: collapse;">
  <tr><td style="padding: 4px 0; font-weight: bold;">Name</td><td>{first} {last}</td></tr>
  <tr><td style="padding: 4px 0; font-weight: bold;">Email</td><td>{email}</td></tr>
  <tr><td style="padding: 4px 0; font-weight: bold;">Phone</td><td>{phone}</td></tr>
  <tr><td style="padding: 4px 0; font-weight: bold;">Subject</td><td>{subject}</td></tr>
</table>
<p style="white-space: pre-wrap; background: white; padding: 16px; border-radius: 6px;">{message}</p>"#,
        first = escape_html(details.first_name),
        last = escape_html(details.last_name),
        email = escape_html(details.email),
        subject = escape_html(details.subject),
        message = escape_html(details.message),
    );

    EmailContent {
        subject: format!("New contact message: {}", details.subject),
        html: layout("New contact message", "New Contact Message", &body),
    }
}

pub fn contact_confirmation_email(first_name: &str, subject: &str) -> EmailContent {
    let body = format!(
        r#"<p>Hi {first_name},</p>
<p>Thanks for reaching out about <strong>{subject}</strong>. Our team has received your message and will get back to you shortly.</p>"#,
        first_name = escape_html(first_name),
        subject = escape_html(subject),
    );

    EmailContent {
        subject: format!("We received your message - {BRAND}"),
        html: layout("We received your message", "Thank you for contacting us", &body),
    }
}
