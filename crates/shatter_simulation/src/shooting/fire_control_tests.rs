//! Tests for the fire guard and scheduled tasks.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::shooting::{FireControl, FireOutcome, PendingFire, ScheduledTask};
    use crate::targeting::{Neighbor, NeighborSnapshot};

    fn pending() -> PendingFire {
        PendingFire {
            query_point: Vec3::new(1.0, 2.0, 3.0),
            snapshot: NeighborSnapshot {
                query_point: Vec3::new(1.0, 2.0, 3.0),
                radius: 8.0,
                neighbors: vec![Neighbor { index: 0, distance: 1.0 }],
                min_distance: 1.0,
            },
        }
    }

    #[test]
    fn test_scheduled_task_countdown() {
        let mut task = ScheduledTask::new(0.5);
        assert!(!task.tick(0.25));
        assert!(!task.tick(0.125));
        assert!(task.tick(0.125));
    }

    #[test]
    fn test_second_fire_rejected_while_in_flight() {
        let mut control = FireControl::new(0.5, 0.8);

        assert_eq!(control.try_fire(pending()), FireOutcome::Accepted);
        assert_eq!(control.try_fire(pending()), FireOutcome::RejectedInFlight);
        assert_eq!(control.rejected_count(), 1);
    }

    #[test]
    fn test_resolution_then_dead_period_then_release() {
        let mut control = FireControl::new(0.5, 0.75);
        control.try_fire(pending());

        assert!(control.poll(0.25).is_none());
        let due = control.poll(0.25);
        assert_eq!(due, Some(pending()));

        // Dead period: shot landed, guard still held
        assert!(control.in_flight());
        assert!(!control.resolution_pending());
        assert_eq!(control.try_fire(pending()), FireOutcome::RejectedInFlight);
        assert!(control.poll(0.125).is_none());

        assert!(control.poll(0.125).is_none());
        assert!(!control.in_flight());
        assert_eq!(control.try_fire(pending()), FireOutcome::Accepted);
    }

    #[test]
    fn test_resolution_fires_once() {
        let mut control = FireControl::new(0.5, 0.8);
        control.try_fire(pending());

        let resolved = (0..120).filter_map(|_| control.poll(1.0 / 60.0)).count();
        assert_eq!(resolved, 1);
        assert!(!control.in_flight());
    }

    #[test]
    fn test_cancel_releases_guard() {
        let mut control = FireControl::new(0.5, 0.8);
        control.try_fire(pending());
        control.cancel();

        assert!(!control.in_flight());
        assert!(control.poll(1.0).is_none());
    }
}
