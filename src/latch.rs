use std::fmt;

/// handler invoked on a flip; the latch captures its output
pub type Handler<R, A> = Box<dyn FnMut(A) -> R>;

/// two-state toggle that runs an action only on a state transition,
/// not on every invocation
///
/// a latch starts disengaged. `set` engages it and runs the bound
/// `on_set` handler, capturing its output; further `set` calls are
/// no-ops until `unset` disengages it again. handlers are optional
/// per direction, so a latch may do meaningful work one way only.
pub struct Latch<R, A> {
    on_set: Option<Handler<R, A>>,
    on_unset: Option<Handler<R, A>>,
    engaged: bool,
    flipped: bool,
    captured: Option<R>,
}

impl<R, A> Latch<R, A> {
    /// disengaged latch with no handlers bound
    pub fn new() -> Latch<R, A> {
        Latch {
            on_set: None,
            on_unset: None,
            engaged: false,
            flipped: false,
            captured: None,
        }
    }

    /// bind the handler run when the latch engages
    pub fn on_set<F>(mut self, f: F) -> Latch<R, A>
    where
        F: FnMut(A) -> R + 'static,
    {
        self.on_set = Some(Box::new(f));
        self
    }

    /// bind the handler run when the latch disengages
    pub fn on_unset<F>(mut self, f: F) -> Latch<R, A>
    where
        F: FnMut(A) -> R + 'static,
    {
        self.on_unset = Some(Box::new(f));
        self
    }

    /// replace both handlers; engagement state, the flip flag and the
    /// captured result are left as they are
    pub fn rebind(&mut self, on_set: Option<Handler<R, A>>, on_unset: Option<Handler<R, A>>) {
        self.on_set = on_set;
        self.on_unset = on_unset;
    }

    /// engage the latch
    ///
    /// flips only if currently disengaged; the flip runs `on_set` when
    /// bound and captures its output. a call that does not flip never
    /// invokes the handler and leaves the capture slot empty.
    pub fn set(&mut self, arg: A) {
        self.captured = None;
        self.flipped = false;

        if !self.engaged {
            // bookkeeping lands before the handler runs; a panicking
            // handler leaves the latch flipped with nothing captured
            self.engaged = true;
            self.flipped = true;
            if let Some(f) = self.on_set.as_mut() {
                self.captured = Some(f(arg));
            }
        }
    }

    /// disengage the latch, mirror of `set`
    pub fn unset(&mut self, arg: A) {
        self.captured = None;
        self.flipped = false;

        if self.engaged {
            self.engaged = false;
            self.flipped = true;
            if let Some(f) = self.on_unset.as_mut() {
                self.captured = Some(f(arg));
            }
        }
    }

    /// did the last `set` or `unset` call flip the latch?
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// is the latch engaged?
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// output captured by the last call; `None` when that call did not
    /// flip or had no handler bound for its direction
    pub fn result(&self) -> Option<&R> {
        self.captured.as_ref()
    }

    /// move the captured output out, leaving the slot empty
    pub fn take_result(&mut self) -> Option<R> {
        self.captured.take()
    }
}

impl<R, A> Default for Latch<R, A> {
    fn default() -> Latch<R, A> {
        Latch::new()
    }
}

impl<R: fmt::Debug, A> fmt::Debug for Latch<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latch")
            .field("engaged", &self.engaged)
            .field("flipped", &self.flipped)
            .field("captured", &self.captured)
            .field("on_set", &self.on_set.is_some())
            .field("on_unset", &self.on_unset.is_some())
            .finish()
    }
}
