//! Background particle pool.
//!
//! The hero background keeps a bounded set of drifting particles. The pool
//! is filled to capacity on start. Every spawn interval one particle is
//! added if there is room, and every particle is removed a fixed lifetime
//! after it was created. Where a particle appears and how it drifts is up
//! to the host; the pool only decides which particles exist.

use std::collections::VecDeque;
use std::time::Duration;

use folio_core::{ParticleConfig, Step, Ticker};

/// Identifier of a particle, unique for the lifetime of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

/// Changes to the pool at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticleFrame {
    /// Time since the pool started.
    pub elapsed: Duration,
    pub spawned: Vec<ParticleId>,
    pub expired: Vec<ParticleId>,
    /// Live particles after this frame.
    pub alive: usize,
}

/// Bounded particle pool driven by a timer.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    capacity: usize,
    spawn_interval: Duration,
    lifetime: Duration,
    /// Time of the next tick.
    now: Duration,
    next_spawn: Duration,
    next_id: u64,
    seeded: bool,
    /// Live particles with their expiry time. All particles share one
    /// lifetime, so creation order is expiry order.
    alive: VecDeque<(ParticleId, Duration)>,
}

impl ParticlePool {
    pub fn new(config: &ParticleConfig) -> Self {
        Self {
            capacity: config.capacity,
            spawn_interval: config.spawn_interval(),
            lifetime: config.lifetime(),
            now: Duration::ZERO,
            next_spawn: config.spawn_interval(),
            next_id: 0,
            seeded: false,
            alive: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    fn spawn(&mut self, now: Duration) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.alive.push_back((id, now + self.lifetime));
        id
    }

    /// Earliest pending expiry or spawn.
    fn next_event(&self) -> Duration {
        match self.alive.front() {
            Some(&(_, expires)) => expires.min(self.next_spawn),
            None => self.next_spawn,
        }
    }

    /// Process everything due at the current instant.
    ///
    /// Expiries run before the spawn check, so a slot freed at the same
    /// instant can be refilled.
    pub fn advance(&mut self) -> ParticleFrame {
        let now = self.now;
        let mut frame = ParticleFrame {
            elapsed: now,
            ..ParticleFrame::default()
        };

        while let Some(&(id, expires)) = self.alive.front() {
            if expires > now {
                break;
            }
            self.alive.pop_front();
            frame.expired.push(id);
        }

        if !self.seeded {
            self.seeded = true;
            while self.alive.len() < self.capacity {
                let id = self.spawn(now);
                frame.spawned.push(id);
            }
        } else if now >= self.next_spawn {
            self.next_spawn += self.spawn_interval;
            if self.alive.len() < self.capacity {
                let id = self.spawn(now);
                frame.spawned.push(id);
            }
        }

        frame.alive = self.alive.len();
        self.now = self.next_event();
        frame
    }
}

impl Ticker for ParticlePool {
    type Frame = ParticleFrame;

    fn tick(&mut self) -> Step<ParticleFrame> {
        let frame = self.advance();
        let delay = self.now.saturating_sub(frame.elapsed);
        Step::after(frame, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Tick until `until` has been processed.
    fn run(pool: &mut ParticlePool, until: Duration) -> Vec<ParticleFrame> {
        let mut frames = Vec::new();
        loop {
            let step = pool.tick();
            let done = step.frame.elapsed >= until;
            frames.push(step.frame);
            if done {
                return frames;
            }
        }
    }

    fn at(frames: &[ParticleFrame], secs: u64) -> &ParticleFrame {
        frames
            .iter()
            .find(|f| f.elapsed == Duration::from_secs(secs))
            .unwrap()
    }

    #[test]
    fn test_seeds_to_capacity() {
        let mut pool = ParticlePool::new(&ParticleConfig::default());
        let step = pool.tick();

        assert_eq!(step.frame.spawned.len(), 50);
        assert_eq!(step.frame.alive, 50);
        assert!(step.frame.expired.is_empty());
        assert_eq!(step.next, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_full_pool_skips_spawns_until_expiry() {
        let mut pool = ParticlePool::new(&ParticleConfig::default());
        let frames = run(&mut pool, Duration::from_secs(21));

        for secs in [3, 6, 9, 12, 15, 18] {
            let frame = at(&frames, secs);
            assert!(frame.spawned.is_empty(), "spawned at {}s", secs);
            assert_eq!(frame.alive, 50);
        }

        let expiry = at(&frames, 20);
        assert_eq!(expiry.expired.len(), 50);
        assert_eq!(expiry.alive, 0);

        let refill = at(&frames, 21);
        assert_eq!(refill.spawned, vec![ParticleId(50)]);
        assert_eq!(refill.alive, 1);
    }

    #[test]
    fn test_trickle_after_first_generation() {
        let mut pool = ParticlePool::new(&ParticleConfig::default());
        let frames = run(&mut pool, Duration::from_secs(41));

        // Spawns at 21, 24, ..., 39 and nothing has expired yet
        assert_eq!(at(&frames, 39).alive, 7);
        // The particle from 21s expires at 41s
        assert_eq!(at(&frames, 41).expired, vec![ParticleId(50)]);
        assert_eq!(at(&frames, 41).alive, 6);
    }

    #[test]
    fn test_capacity_and_lifetime_hold() {
        let config = ParticleConfig {
            capacity: 3,
            spawn_interval_ms: 1000,
            lifetime_ms: 2500,
        };
        let mut pool = ParticlePool::new(&config);
        let mut born = HashMap::new();

        for frame in run(&mut pool, Duration::from_secs(60)) {
            assert!(frame.alive <= 3);
            for id in &frame.expired {
                let created = born.remove(id).unwrap();
                assert_eq!(frame.elapsed - created, Duration::from_millis(2500));
            }
            for id in frame.spawned {
                assert!(born.insert(id, frame.elapsed).is_none());
            }
            assert_eq!(born.len(), frame.alive);
        }
    }

    #[test]
    fn test_empty_capacity_never_spawns() {
        let config = ParticleConfig {
            capacity: 0,
            ..ParticleConfig::default()
        };
        let mut pool = ParticlePool::new(&config);
        let frames = run(&mut pool, Duration::from_secs(30));

        assert!(frames.iter().all(|f| f.spawned.is_empty()));
        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 0);
    }
}
