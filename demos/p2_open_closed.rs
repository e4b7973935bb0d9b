//! Open/Closed
//! Example: Adding Notification Channels Without Touching notify_all
//!
//! Run with: cargo run --example p2_open_closed

use colored::Colorize;
use std::io::{self, Write};

use solid::logging;
use solid::notification::{
    notify_all, EmailNotification, Notification, PushNotification, SmsNotification,
};

// A channel defined outside the library. notify_all needs no change to use it.
struct SlackNotification {
    room: String,
}

impl Notification for SlackNotification {
    fn channel(&self) -> &str {
        "slack"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> solid::Result<()> {
        writeln!(out, "Posting to #{}: {message}", self.room)?;
        Ok(())
    }
}

fn main() -> solid::Result<()> {
    logging::init();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", "=== Built-in Channels ===".bold())?;
    let mut notifications: Vec<Box<dyn Notification>> = vec![
        Box::new(EmailNotification),
        Box::new(SmsNotification),
        Box::new(PushNotification),
    ];
    notify_all(&notifications, "You have a new notification!", &mut out)?;

    writeln!(out, "\n{}", "=== Extended Without Modification ===".bold())?;
    notifications.push(Box::new(SlackNotification {
        room: "releases".to_string(),
    }));
    notify_all(&notifications, "v0.1.0 is out", &mut out)?;

    Ok(())
}
