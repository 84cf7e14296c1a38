/// Three time levels `n - 1`, `n`, `n + 1` kept in a fixed ring.
///
/// `head` points at the newest level. Advancing the ring turns the oldest buffer
/// into the slot for the next level, so no buffer is ever reallocated.
#[derive(Debug, Clone)]
pub struct TimeLevels {
    buf: [Vec<f64>; 3],
    head: usize,
}

impl TimeLevels {
    /// `initial` becomes level 0; the other two buffers are zeroed.
    pub fn new(initial: Vec<f64>) -> TimeLevels {
        let n = initial.len();
        TimeLevels {
            buf: [vec![0.; n], vec![0.; n], initial],
            head: 2,
        }
    }

    /// Newest level.
    pub fn current(&self) -> &[f64] {
        &self.buf[self.head]
    }

    /// Level before the newest.
    pub fn previous(&self) -> &[f64] {
        &self.buf[(self.head + 2) % 3]
    }

    /// Borrows `(previous, current, next)`. `next` holds stale data and is meant
    /// to be overwritten before calling `advance`.
    pub fn split(&mut self) -> (&[f64], &[f64], &mut [f64]) {
        let [a, b, c] = &mut self.buf;
        let (prev, cur, next) = match self.head {
            0 => (c, a, b),
            1 => (a, b, c),
            _ => (b, c, a),
        };
        (prev.as_slice(), cur.as_slice(), next.as_mut_slice())
    }

    /// Makes the freshly written `next` the newest level.
    pub fn advance(&mut self) {
        self.head = (self.head + 1) % 3;
    }

    pub fn into_current(self) -> Vec<f64> {
        let [a, b, c] = self.buf;
        match self.head {
            0 => a,
            1 => b,
            _ => c,
        }
    }
}
