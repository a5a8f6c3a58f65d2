#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Info,
    Error,
}

impl NotifyLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotifyLevel::Success => "toast-success",
            NotifyLevel::Info => "toast-info",
            NotifyLevel::Error => "toast-error",
        }
    }
}

/// Transient user notifications raised after each backend call resolves.
pub trait Notifier {
    fn notify(&self, level: NotifyLevel, message: String);

    fn success(&self, message: impl Into<String>) {
        self.notify(NotifyLevel::Success, message.into());
    }

    fn info(&self, message: impl Into<String>) {
        self.notify(NotifyLevel::Info, message.into());
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(NotifyLevel::Error, message.into());
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, level: NotifyLevel, message: String) {
        (**self).notify(level, message);
    }
}
