//! Open/closed: `notify_all` is written once against the `Notification` trait.
//! New channels are added by implementing the trait, never by editing it.

use std::io::Write;

use log::{debug, warn};

use crate::error::Result;

pub trait Notification {
    fn channel(&self) -> &str;
    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotification;

impl Notification for EmailNotification {
    fn channel(&self) -> &str {
        "email"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending email: {message}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotification;

impl Notification for SmsNotification {
    fn channel(&self) -> &str {
        "sms"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending SMS: {message}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PushNotification;

impl Notification for PushNotification {
    fn channel(&self) -> &str {
        "push"
    }

    fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Sending push notification: {message}")?;
        Ok(())
    }
}

/// Sends `message` through every notification, in order. Stops at the first failure.
pub fn notify_all(
    notifications: &[Box<dyn Notification>],
    message: &str,
    out: &mut dyn Write,
) -> Result<()> {
    for notification in notifications {
        debug!("notifying via {}", notification.channel());
        if let Err(err) = notification.send(message, out) {
            warn!("{} notification failed: {err}", notification.channel());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolidError;

    struct PagerNotification;

    impl Notification for PagerNotification {
        fn channel(&self) -> &str {
            "pager"
        }

        fn send(&self, message: &str, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "Paging: {message}")?;
            Ok(())
        }
    }

    struct OfflineNotification;

    impl Notification for OfflineNotification {
        fn channel(&self) -> &str {
            "offline"
        }

        fn send(&self, _message: &str, _out: &mut dyn Write) -> Result<()> {
            Err(SolidError::operation_failed("offline", "no route"))
        }
    }

    #[test]
    fn test_notify_all_in_order() {
        let notifications: Vec<Box<dyn Notification>> = vec![
            Box::new(EmailNotification),
            Box::new(SmsNotification),
            Box::new(PushNotification),
        ];
        let mut out = Vec::new();
        notify_all(&notifications, "You have a new notification!", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sending email: You have a new notification!\n\
             Sending SMS: You have a new notification!\n\
             Sending push notification: You have a new notification!\n"
        );
    }

    #[test]
    fn test_new_channel_needs_no_change_to_notify_all() {
        let notifications: Vec<Box<dyn Notification>> =
            vec![Box::new(PagerNotification), Box::new(EmailNotification)];
        let mut out = Vec::new();
        notify_all(&notifications, "hi", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Paging: hi\nSending email: hi\n");
    }

    #[test]
    fn test_first_failure_stops_delivery() {
        let notifications: Vec<Box<dyn Notification>> = vec![
            Box::new(SmsNotification),
            Box::new(OfflineNotification),
            Box::new(PushNotification),
        ];
        let mut out = Vec::new();
        let result = notify_all(&notifications, "hi", &mut out);
        assert!(matches!(result, Err(SolidError::OperationFailed { .. })));
        assert_eq!(String::from_utf8(out).unwrap(), "Sending SMS: hi\n");
    }

    #[test]
    fn test_empty_list_is_ok() {
        let mut out = Vec::new();
        assert!(notify_all(&[], "nobody", &mut out).is_ok());
        assert!(out.is_empty());
    }
}
