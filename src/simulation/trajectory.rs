//! Recorded trajectory of one integration run
//!
//! `TrajectoryRecorder` is owned by the driver while stepping and only
//! grows by one snapshot per step. `finish` freezes it into a `Trajectory`,
//! which has no mutating API and can be shared with any number of readers
//! (e.g. render frames on other threads).
//!
//! Snapshots are stored flat, `body_count` entries per step, so
//! `trajectory[step][body]` is a plain slice lookup.

use std::ops::Index;

use crate::error::SimError;
use crate::simulation::states::{NVec2, System};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: NVec2,
    pub velocity: NVec2,
}

#[derive(Debug)]
pub struct TrajectoryRecorder {
    masses: Vec<f64>,
    times: Vec<f64>,
    states: Vec<BodyState>,
    capacity: usize,
}

impl TrajectoryRecorder {
    /// Allocate room for `steps` snapshots of `masses.len()` bodies
    ///
    /// Fails when either buffer would exceed `isize::MAX` bytes.
    pub fn with_capacity(masses: Vec<f64>, steps: usize) -> Result<Self, SimError> {
        let n = masses.len();
        let overflow = || SimError::CapacityOverflow { snapshots: steps, bodies: n };

        let time_bytes = steps
            .checked_mul(std::mem::size_of::<f64>())
            .ok_or_else(overflow)?;
        let entries = steps.checked_mul(n).ok_or_else(overflow)?;
        let bytes = entries
            .checked_mul(std::mem::size_of::<BodyState>())
            .ok_or_else(overflow)?;
        if bytes.max(time_bytes) > isize::MAX as usize {
            return Err(overflow());
        }

        Ok(Self {
            masses,
            times: Vec::with_capacity(steps),
            states: Vec::with_capacity(entries),
            capacity: steps,
        })
    }

    /// Append the current state of `sys` as the next snapshot
    ///
    /// The buffer never grows past the capacity it was created with, and
    /// every snapshot must carry the same bodies as the first.
    pub fn record(&mut self, sys: &System) -> Result<(), SimError> {
        if self.times.len() >= self.capacity {
            return Err(SimError::TrajectoryFull { capacity: self.capacity });
        }
        if sys.len() != self.masses.len() {
            return Err(SimError::LengthMismatch {
                what: "bodies",
                expected: self.masses.len(),
                found: sys.len(),
            });
        }

        self.times.push(sys.t);
        self.states.extend(sys.bodies.iter().map(|b| BodyState {
            position: b.x,
            velocity: b.v,
        }));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Freeze the recording
    pub fn finish(self) -> Trajectory {
        Trajectory {
            masses: self.masses,
            times: self.times,
            states: self.states,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    masses: Vec<f64>,
    times: Vec<f64>,
    states: Vec<BodyState>,
}

impl Trajectory {
    /// Number of recorded snapshots (steps + 1 for a complete run)
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn body_count(&self) -> usize {
        self.masses.len()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Simulated time of snapshot `step`
    pub fn time(&self, step: usize) -> Option<f64> {
        self.times.get(step).copied()
    }

    /// All body states of snapshot `step`
    pub fn step(&self, step: usize) -> Option<&[BodyState]> {
        if step >= self.len() {
            return None;
        }
        let n = self.body_count();
        Some(&self.states[step * n..(step + 1) * n])
    }

    pub fn final_state(&self) -> Option<&[BodyState]> {
        self.len().checked_sub(1).and_then(|last| self.step(last))
    }

    /// Position of one body at every recorded step
    pub fn positions_of(&self, body: usize) -> impl Iterator<Item = NVec2> + '_ {
        let n = self.body_count();
        self.states
            .iter()
            .skip(body)
            .step_by(n.max(1))
            .take(if body < n { self.len() } else { 0 })
            .map(|s| s.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[BodyState]> + '_ {
        self.states.chunks(self.body_count().max(1))
    }
}

impl Index<usize> for Trajectory {
    type Output = [BodyState];

    fn index(&self, step: usize) -> &[BodyState] {
        let n = self.body_count();
        &self.states[step * n..(step + 1) * n]
    }
}
