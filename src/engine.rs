//! Generation engine: advances a [`Grid`] sequentially or on a pool of
//! scoped worker threads.
//!
//! Both modes read only the current generation and write only a fresh
//! buffer, which replaces the state after every cell is computed, so the
//! result does not depend on the number of workers.

use crate::grid::Cell;
use crate::{Grid, GridError, GridResult};
use log::{debug, error, trace};


/// How generations are computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    /// Round-robin partition of cell indices over this many threads.
    Concurrent(usize),
}

impl Mode {
    /// `Sequential` for a single worker, `Concurrent` otherwise.
    pub fn with_workers(worker_count: usize) -> Self {
        if worker_count == 1 {
            Self::Sequential
        } else {
            Self::Concurrent(worker_count)
        }
    }
}

impl Grid {
    /// Advances the field by `steps` generations.
    pub fn evolve(&mut self, steps: u64, mode: Mode) -> GridResult<()> {
        match mode {
            Mode::Sequential => {
                self.advance(steps);
                Ok(())
            }
            Mode::Concurrent(worker_count) => self.advance_concurrent(steps, worker_count),
        }
    }

    /// Advances the field by `steps` generations on the calling thread.
    pub fn advance(&mut self, steps: u64) {
        for generation in 0..steps {
            let mut next = vec![0; self.len()];
            for (index, slot) in next.iter_mut().enumerate() {
                *slot = self.next_cell_state(index) as Cell;
            }
            self.state = next;
            trace!("Committed generation {generation}");
        }
    }

    /// Advances the field by `steps` generations using `worker_count` threads.
    ///
    /// Worker `w` computes the cells `w, w + worker_count, w + 2 * worker_count, ...`.
    /// A generation is committed only after every worker has finished it; if a
    /// worker fails the state stays at the last committed generation.
    pub fn advance_concurrent(&mut self, steps: u64, worker_count: usize) -> GridResult<()> {
        self.advance_concurrent_with(steps, worker_count, Grid::next_cell_state)
    }

    pub(crate) fn advance_concurrent_with<F>(
        &mut self,
        steps: u64,
        worker_count: usize,
        kernel: F,
    ) -> GridResult<()>
    where
        F: Fn(&Grid, usize) -> bool + Sync,
    {
        if worker_count == 0 {
            return Err(GridError::InvalidWorkerCount);
        }
        debug!(
            "Advancing {} cells by {steps} generations on {worker_count} workers",
            self.len()
        );
        for generation in 0..steps {
            match self.step_partitioned(worker_count, &kernel) {
                Ok(next) => self.state = next,
                Err(worker) => {
                    error!("Worker #{worker} failed, generation {generation} discarded");
                    return Err(GridError::GenerationFailure { generation, worker });
                }
            }
            trace!("Committed generation {generation}");
        }
        Ok(())
    }

    /// Computes the next generation into a new buffer.
    ///
    /// Every worker collects the cells of its stride into its own vector;
    /// they are scattered into the buffer only after all workers are joined.
    /// Returns the index of the first failed worker instead of a partially
    /// written buffer.
    fn step_partitioned<F>(&self, worker_count: usize, kernel: &F) -> Result<Vec<Cell>, usize>
    where
        F: Fn(&Grid, usize) -> bool + Sync,
    {
        let len = self.len();
        let strides = std::thread::scope(|s| {
            let handles = (0..worker_count)
                .map(|worker| {
                    s.spawn(move || {
                        (worker..len)
                            .step_by(worker_count)
                            .map(|index| kernel(self, index) as Cell)
                            .collect::<Vec<Cell>>()
                    })
                })
                .collect::<Vec<_>>();
            // every handle is joined, the scope never panics on our behalf
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });

        let mut next = vec![0; len];
        for (worker, stride) in strides.into_iter().enumerate() {
            let stride = stride.map_err(|_| worker)?;
            scatter_stride(&mut next, worker, worker_count, &stride);
        }
        Ok(next)
    }
}

/// Writes `stride` into the slots `worker, worker + worker_count, ...` of `buf`.
fn scatter_stride(buf: &mut [Cell], worker: usize, worker_count: usize, stride: &[Cell]) {
    let slots = buf.iter_mut().skip(worker).step_by(worker_count);
    for (slot, &cell) in slots.zip(stride) {
        *slot = cell;
    }
}
