//! The simulation engine: runs a [`Request`] to completion and produces a [`Response`].
//!
//! The entry point is [`simulate`]. It walks the direction tokens in order,
//! expanding repetitions into atomic steps, and stops at the first invalid
//! token or the first move that would leave the arena.
//!
//! # Termination
//!
//! - An invalid token is appended to the path verbatim and ends the run with
//!   [`Status::Error`]. The pose is whatever it was before that token.
//! - A `forward`/`backward` step whose destination is outside the closed
//!   arena bounds is appended to the path and ends the run with
//!   [`Status::Crash`]. The destination is discarded.
//! - Otherwise the run ends with [`Status::Ok`].
//!
//! The request is only borrowed, and no state survives the call.

use crate::command::Command;
use crate::model::{ArenaBounds, Request, Response, Status};
use crate::robot::{Direction, RobotState};
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Runs the request and returns its outcome. Never fails.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = request.directions.len()))]
pub fn simulate(request: &Request) -> Response {
    let mut sim = Simulation::new(request);

    for token in &request.directions {
        let command = match Command::parse(token) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, location = %sim.robot.location, "rejected direction token");
                sim.path.push(token.clone());
                return sim.finish(Status::Error);
            }
        };

        for _ in 0..command.repetition {
            if sim.step(command.direction).is_break() {
                return sim.finish(Status::Crash);
            }
        }
    }

    sim.finish(Status::Ok)
}

/// Mutable state for a single run.
struct Simulation {
    bounds: ArenaBounds,
    robot: RobotState,
    path: Vec<String>,
}

impl Simulation {
    fn new(request: &Request) -> Self {
        Self {
            bounds: request.arena.bounds(),
            robot: RobotState::new(request.location, request.heading),
            path: Vec::with_capacity(request.directions.len()),
        }
    }

    /// Performs one atomic step. Breaks if the step would leave the arena.
    fn step(&mut self, direction: Direction) -> ControlFlow<()> {
        self.path.push(direction.as_str().to_owned());

        match direction {
            Direction::Left => self.robot.rotate_left(),
            Direction::Right => self.robot.rotate_right(),
            Direction::Forward | Direction::Backward => {
                // Overflowing the coordinate range can never land inside the bounds.
                match self.robot.candidate(direction) {
                    Some(next) if self.bounds.contains(next) => {
                        trace!(%direction, from = %self.robot.location, to = %next, "moved");
                        self.robot.location = next;
                    }
                    target => {
                        debug!(
                            %direction,
                            location = %self.robot.location,
                            heading = %self.robot.heading,
                            target = ?target,
                            "robot crashed into arena wall"
                        );
                        return ControlFlow::Break(());
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn finish(self, status: Status) -> Response {
        debug!(%status, steps = self.path.len(), "simulation finished");
        Response {
            status,
            location: self.robot.location,
            heading: self.robot.heading,
            path: self.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arena, Coordinate};
    use crate::robot::Heading;
    use tracing_test::traced_test;

    fn request(corner: (i64, i64), start: (i64, i64), heading: Heading, dirs: &[&str]) -> Request {
        Request {
            arena: Arena {
                corner1: Coordinate::new(0, 0),
                corner2: Coordinate::new(corner.0, corner.1),
            },
            location: Coordinate::new(start.0, start.1),
            heading,
            directions: dirs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_directions_are_ok() {
        let req = request((3, 3), (1, 2), Heading::South, &[]);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Ok);
        assert_eq!(res.location, Coordinate::new(1, 2));
        assert_eq!(res.heading, Heading::South);
        assert!(res.path.is_empty());
    }

    #[test]
    fn crash_halts_remaining_tokens() {
        let req = request((2, 2), (0, 2), Heading::North, &["left", "forward", "right"]);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Crash);
        assert_eq!(res.location, Coordinate::new(0, 2));
        assert_eq!(res.heading, Heading::West);
        assert_eq!(res.path, vec!["left", "forward"]);
    }

    #[test]
    fn error_stops_before_later_valid_tokens() {
        let req = request((5, 5), (0, 0), Heading::East, &["forward", "jump(3)", "forward"]);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Error);
        assert_eq!(res.location, Coordinate::new(1, 0));
        assert_eq!(res.path, vec!["forward", "jump(3)"]);
    }

    #[test]
    fn crash_mid_repetition_keeps_partial_progress() {
        let req = request((3, 0), (0, 0), Heading::East, &["forward(10)"]);
        let res = simulate(&req);

        // Three successful steps reach the east wall; the fourth crashes.
        assert_eq!(res.status, Status::Crash);
        assert_eq!(res.location, Coordinate::new(3, 0));
        assert_eq!(res.path.len(), 4);
        assert!(res.path.iter().all(|p| p == "forward"));
    }

    #[test]
    fn start_outside_arena_is_not_itself_a_crash() {
        let req = request((2, 2), (9, 9), Heading::North, &["left", "right"]);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Ok);
        assert_eq!(res.location, Coordinate::new(9, 9));
    }

    #[test]
    fn overflowing_step_is_a_crash() {
        let mut req = request((0, 0), (0, 0), Heading::North, &["forward"]);
        req.arena.corner1 = Coordinate::new(0, 0);
        req.arena.corner2 = Coordinate::new(0, i64::MAX);
        req.location = Coordinate::new(0, i64::MAX);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Crash);
        assert_eq!(res.location, Coordinate::new(0, i64::MAX));
        assert_eq!(res.path, vec!["forward"]);
    }

    #[test]
    fn request_is_not_mutated() {
        let req = request((4, 4), (0, 0), Heading::North, &["forward(2)", "right"]);
        let before = req.clone();
        let _ = simulate(&req);
        assert_eq!(req, before);
    }

    #[traced_test]
    #[test]
    fn logs_crash_and_outcome() {
        let req = request((0, 0), (0, 0), Heading::North, &["backward"]);
        let res = simulate(&req);

        assert_eq!(res.status, Status::Crash);
        assert!(logs_contain("robot crashed into arena wall"));
        assert!(logs_contain("simulation finished"));
    }
}
