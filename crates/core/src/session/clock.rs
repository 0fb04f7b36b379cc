use std::cell::Cell;

/// Source of "now", in seconds since the Unix epoch
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock (`Date.now()` under wasm via chrono's `wasmbind`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually driven clock for tests
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<i64>,
}

impl FixedClock {
    pub fn at(now: i64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}

impl<T: Clock + ?Sized> Clock for std::rc::Rc<T> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}
