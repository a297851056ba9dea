#![forbid(unsafe_code)]

//! Cross-thread text mailbox.
//!
//! Background producers never touch widgets. They post `(WidgetId, text)`
//! pairs through a [`TextPoster`]; the shell drains the queue at the start
//! of its next update and applies each post on the frame thread.

use std::sync::mpsc;

use slate_widgets::WidgetId;

/// Sending half of the mailbox. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct TextPoster {
    sender: mpsc::Sender<(WidgetId, String)>,
}

impl TextPoster {
    /// Queue `text` to replace the contents of editor `target`.
    ///
    /// Returns `false` once the shell has been dropped.
    pub fn post(&self, target: WidgetId, text: impl Into<String>) -> bool {
        self.sender.send((target, text.into())).is_ok()
    }
}

/// Receiving half, owned by the shell.
#[derive(Debug)]
pub(crate) struct Mailbox {
    receiver: mpsc::Receiver<(WidgetId, String)>,
}

impl Mailbox {
    /// Everything posted so far, in posting order. Never blocks.
    pub(crate) fn drain(&self) -> impl Iterator<Item = (WidgetId, String)> + '_ {
        self.receiver.try_iter()
    }
}

pub(crate) fn channel() -> (TextPoster, Mailbox) {
    let (sender, receiver) = mpsc::channel();
    (TextPoster { sender }, Mailbox { receiver })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_widgets::{TextEditor, WidgetTree};

    #[test]
    fn drains_in_posting_order() {
        let mut tree = WidgetTree::new();
        let a = tree.add(TextEditor::new());
        let b = tree.add(TextEditor::new());
        let (poster, mailbox) = channel();
        assert!(poster.post(a, "one"));
        assert!(poster.clone().post(b, "two"));
        let posts: Vec<_> = mailbox.drain().collect();
        assert_eq!(posts, [(a, "one".to_owned()), (b, "two".to_owned())]);
        assert_eq!(mailbox.drain().count(), 0);
    }

    #[test]
    fn post_fails_after_receiver_is_gone() {
        let mut tree = WidgetTree::new();
        let a = tree.add(TextEditor::new());
        let (poster, mailbox) = channel();
        drop(mailbox);
        assert!(!poster.post(a, "lost"));
    }
}
