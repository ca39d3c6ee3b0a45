use super::EntityId;

/// Identifier of a timer within the registry. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u32);

/// Effect run when a timer expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerEffect {
    /// One hunger pang for the attached entity.
    Hunger,
    /// The attached monster forgets the location it was alerted to.
    ClearAlert,
}

/// Countdown attached to an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    pub id: TimerId,
    pub name: String,
    pub total_turns: u32,
    pub remaining: u32,
    pub repeating: bool,
    pub entity: EntityId,
    pub effect: TimerEffect,
}

/// Every live timer, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerRegistry {
    next_id: u32,
    timers: Vec<Timer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a new timer. A zero duration is treated as one turn.
    pub fn arm(
        &mut self,
        name: impl Into<String>,
        turns: u32,
        repeating: bool,
        entity: EntityId,
        effect: TimerEffect,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let turns = turns.max(1);
        self.timers.push(Timer {
            id,
            name: name.into(),
            total_turns: turns,
            remaining: turns,
            repeating,
            entity,
            effect,
        });
        id
    }

    pub fn get(&self, id: TimerId) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    /// First timer attached to `entity` with the given effect.
    pub fn find(&self, entity: EntityId, effect: TimerEffect) -> Option<&Timer> {
        self.timers
            .iter()
            .find(|t| t.entity == entity && t.effect == effect)
    }

    pub fn find_mut(&mut self, entity: EntityId, effect: TimerEffect) -> Option<&mut Timer> {
        self.timers
            .iter_mut()
            .find(|t| t.entity == entity && t.effect == effect)
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<Timer> {
        let index = self.timers.iter().position(|t| t.id == id)?;
        Some(self.timers.remove(index))
    }

    /// Drops every timer whose entity fails `keep`.
    pub fn retain_entities(&mut self, mut keep: impl FnMut(EntityId) -> bool) {
        self.timers.retain(|t| keep(t.entity));
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.iter()
    }

    /// Decrements every timer once and returns the ones that hit zero.
    ///
    /// Repeating timers are re-armed with their full duration; one-shot
    /// timers are removed. The returned list is in registry order.
    pub fn advance(&mut self) -> Vec<Timer> {
        let mut fired = Vec::new();
        self.timers.retain_mut(|timer| {
            timer.remaining = timer.remaining.saturating_sub(1);
            if timer.remaining > 0 {
                return true;
            }
            fired.push(timer.clone());
            if timer.repeating {
                timer.remaining = timer.total_turns;
                true
            } else {
                false
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_after_exact_duration() {
        let mut timers = TimerRegistry::new();
        let id = timers.arm("alert", 3, false, EntityId(2), TimerEffect::ClearAlert);

        assert!(timers.advance().is_empty());
        assert!(timers.advance().is_empty());
        let fired = timers.advance();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, id);
        assert!(timers.get(id).is_none());
        assert!(timers.advance().is_empty());
    }

    #[test]
    fn repeating_timer_rearms_with_same_duration() {
        let mut timers = TimerRegistry::new();
        let id = timers.arm("hunger", 2, true, EntityId::PLAYER, TimerEffect::Hunger);

        let mut fires = 0;
        for _ in 0..6 {
            fires += timers.advance().len();
        }
        assert_eq!(fires, 3);
        let timer = timers.get(id).expect("repeating timer stays armed");
        assert_eq!(timer.remaining, timer.total_turns);
    }

    #[test]
    fn independent_timers_on_one_entity() {
        let mut timers = TimerRegistry::new();
        timers.arm("a", 1, false, EntityId(5), TimerEffect::ClearAlert);
        timers.arm("b", 1, false, EntityId(5), TimerEffect::ClearAlert);
        assert_eq!(timers.advance().len(), 2);
        assert!(timers.is_empty());
    }
}
