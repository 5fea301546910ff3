/// Result of running a production. `Ok` carries the advanced state and the
/// matched value, `Err` carries the state at the point the production was
/// entered.
pub type Parsed<'a, T> = Result<(State<'a>, T), State<'a>>;

/// The furthest point in the input any matcher failed at, and what it was
/// looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub pos: usize,
    pub expected: &'static str,
}

/// A saved position to rewind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Parser state. Keeps track of a position within a str.
///
/// States are passed by value through every production, so saving a position
/// is a copy and restoring it never touches shared state. The position is
/// always on a char boundary and never past the end of input.
#[derive(Debug, Clone, Copy)]
pub struct State<'a> {
    input: &'a str,
    idx: usize,
    furthest: Option<Failure>,
}

impl<'a> State<'a> {
    pub fn new(input: &'a str) -> Self {
        State {
            input,
            idx: 0,
            furthest: None,
        }
    }

    /// Create a state at `start`, clamped to the input and moved back to the
    /// nearest char boundary.
    pub fn at(input: &'a str, start: usize) -> Self {
        let mut idx = start.min(input.len());
        while !input.is_char_boundary(idx) {
            idx -= 1;
        }
        State {
            input,
            idx,
            furthest: None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn position(&self) -> usize {
        self.idx
    }

    /// The input not yet consumed.
    pub fn rest(&self) -> &'a str {
        &self.input[self.idx..]
    }

    pub fn is_at_end(&self) -> bool {
        self.idx >= self.input.len()
    }

    pub fn furthest_failure(&self) -> Option<Failure> {
        self.furthest
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.idx)
    }

    /// Move back to a previously taken checkpoint. Failure tracking is kept.
    pub fn rewind(mut self, checkpoint: Checkpoint) -> Self {
        debug_assert!(checkpoint.0 <= self.input.len());
        self.idx = checkpoint.0;
        self
    }

    /// Advance to the start of `rest`, a suffix of the remaining input as
    /// returned by a nom parser.
    pub(crate) fn advance_to(mut self, rest: &'a str) -> Self {
        debug_assert!(rest.len() <= self.input.len() - self.idx);
        self.idx = self.input.len() - rest.len();
        self
    }

    /// Record that something `expected` was not found at the current
    /// position. Later failures at the same position replace earlier ones.
    pub fn fail(mut self, expected: &'static str) -> Self {
        match self.furthest {
            Some(failure) if failure.pos > self.idx => {}
            _ => {
                self.furthest = Some(Failure {
                    pos: self.idx,
                    expected,
                })
            }
        }
        self
    }

    /// Run `f`, leaving the position unmodified if it fails.
    pub fn attempt<T, F>(self, f: F) -> Parsed<'a, T>
    where
        F: FnOnce(Self) -> Parsed<'a, T>,
    {
        let checkpoint = self.checkpoint();
        f(self).map_err(|state| state.rewind(checkpoint))
    }

    /// Try each candidate in order from the same checkpoint, committing to the
    /// first that matches.
    pub fn any_of<T>(self, candidates: &[fn(State<'a>) -> Parsed<'a, T>]) -> Parsed<'a, T> {
        let checkpoint = self.checkpoint();
        let mut state = self;
        for candidate in candidates {
            match candidate(state) {
                Ok(matched) => return Ok(matched),
                Err(failed) => state = failed.rewind(checkpoint),
            }
        }
        Err(state)
    }

    /// Repeatedly apply `f` until it fails. Matching zero times is fine.
    pub fn repeat<T, F>(self, f: F) -> (Self, Vec<T>)
    where
        F: Fn(Self) -> Parsed<'a, T>,
    {
        let mut state = self;
        let mut values = Vec::new();
        loop {
            match state.attempt(&f) {
                Ok((next, value)) => {
                    let progressed = next.idx > state.idx;
                    state = next;
                    values.push(value);
                    if !progressed {
                        return (state, values);
                    }
                }
                Err(next) => return (next, values),
            }
        }
    }

    /// Attempt to apply `f`, succeeding regardless of what it returns.
    pub fn optional<T, F>(self, f: F) -> (Self, Option<T>)
    where
        F: FnOnce(Self) -> Parsed<'a, T>,
    {
        match self.attempt(f) {
            Ok((state, value)) => (state, Some(value)),
            Err(state) => (state, None),
        }
    }
}
