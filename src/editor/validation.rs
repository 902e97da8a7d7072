/// Why a text buffer was sent to the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationPurpose {
    /// Opportunistic check while typing; failures stay silent.
    LiveEdit,
    /// The user asked to leave the text editor; failures are shown.
    ModeSwitch,
}

/// One in-flight parser request. Hand `text` to the parser, then pass the ticket back together
/// with the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationTicket {
    /// Issue order; only the newest ticket is current.
    pub seq: u64,
    /// Why the text is being checked.
    pub purpose: ValidationPurpose,
    /// Buffer snapshot to parse.
    pub text: String,
}

/// What completing a validation did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationApplied {
    /// Live edit parsed; the template now reflects the buffer.
    Applied,
    /// Mode switch parsed; the session is back in the visual editor.
    SwitchedToWysiwyg,
    /// Mode switch rejected; the message is now the error banner.
    Rejected(String),
    /// Live edit did not parse; nothing changed.
    Ignored,
    /// Superseded by a newer request, or the session left text mode or closed.
    Stale,
}

/// Last-writer-wins bookkeeping for parser requests.
#[derive(Clone, Debug, Default)]
pub(crate) struct ValidationTracker {
    next_seq: u64,
    latest: Option<(u64, ValidationPurpose)>,
}

impl ValidationTracker {
    /// Issue a ticket that supersedes every earlier one.
    pub(crate) fn issue(&mut self, purpose: ValidationPurpose, text: &str) -> ValidationTicket {
        self.next_seq += 1;
        self.latest = Some((self.next_seq, purpose));
        ValidationTicket {
            seq: self.next_seq,
            purpose,
            text: text.to_owned(),
        }
    }

    pub(crate) fn is_current(&self, ticket: &ValidationTicket) -> bool {
        self.latest.is_some_and(|(seq, _)| seq == ticket.seq)
    }

    /// Purpose of the outstanding request, if any.
    pub(crate) fn pending(&self) -> Option<ValidationPurpose> {
        self.latest.map(|(_, purpose)| purpose)
    }

    /// Mark the current request as answered.
    pub(crate) fn settle(&mut self, ticket: &ValidationTicket) {
        if self.is_current(ticket) {
            self.latest = None;
        }
    }

    /// Make every outstanding ticket stale.
    pub(crate) fn cancel(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/validation.rs"]
mod tests;
