#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual variant of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

/// Queue of on-screen toasts, provided through context. Each toast is
/// dismissed by id after a display timeout or a click.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastState {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            title: title.to_owned(),
            description: description.to_owned(),
            kind,
        });
        self.next_id
    }

    pub fn info(&mut self, title: &str, description: &str) -> u64 {
        self.push(ToastKind::Info, title, description)
    }

    pub fn error(&mut self, title: &str, description: &str) -> u64 {
        self.push(ToastKind::Error, title, description)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
