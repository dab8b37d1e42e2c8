// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use iced::Task;

impl App {
    /// Applies a message to the application state.
    ///
    /// The slider reports every accepted drag sample; storing the reported
    /// pair here is what keeps the next `view` in sync with the thumbs.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RangeChanged(values) => {
                tracing::trace!(lower = values.lower, upper = values.upper, "range changed");
                self.values = values;
            }
            Message::RangeReleased => {
                tracing::info!(
                    lower = self.values.lower,
                    upper = self.values.upper,
                    "range selected"
                );
            }
            Message::DismissNotice => {
                self.notice = None;
            }
        }
        Task::none()
    }
}
