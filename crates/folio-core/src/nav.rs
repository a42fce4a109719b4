//! Section navigation shared by every front end.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    /// Zero-based section index.
    Section(usize),
}

/// Resolve a command to an index for a list of `len` sections, given the
/// current active index. Next/previous stop at either end; `None` for
/// out-of-range jumps or an empty list.
#[inline]
pub fn resolve_nav(command: NavCommand, active: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match command {
        NavCommand::Next => Some((active + 1).min(last)),
        NavCommand::Previous => Some(active.saturating_sub(1).min(last)),
        NavCommand::First => Some(0),
        NavCommand::Last => Some(last),
        NavCommand::Section(i) => (i <= last).then_some(i),
    }
}
