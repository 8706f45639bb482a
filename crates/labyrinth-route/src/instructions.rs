//! Turn-by-turn directions for a path.

use crate::transition::transition;
use labyrinth_core::{Crossing, Segment, StreetId, TopologyError, Turn};
use labyrinth_grid::GridTopology;

/// Last line of every set of directions.
pub const DONE: &str = "Done.";

/// Rendered directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructions {
    /// One sentence per line: the start, each reported corner, then [`DONE`].
    pub lines: Vec<String>,
    /// Crossing points over all reported corners.
    pub crossings: u32,
}

fn name(topology: &GridTopology, street: StreetId) -> Result<&str, TopologyError> {
    topology
        .street_name(street)
        .ok_or(TopologyError::UnknownStreet { street })
}

fn turn_text(turn: Turn) -> &'static str {
    match turn {
        Turn::Straight => "continue straight",
        Turn::Left => "turn left",
        Turn::Right => "turn right",
        Turn::UTurn => "head back the way you came",
    }
}

/// Render `path` as directions.
///
/// Corners where the walker carries straight on along the same side of
/// the street produce no line. Pure: the output depends only on the
/// topology's street names and `path`.
pub fn render(topology: &GridTopology, path: &[Segment]) -> Result<Instructions, TopologyError> {
    let mut lines = Vec::with_capacity(path.len() + 1);
    let mut crossings = 0u32;

    if let Some(first) = path.first() {
        let start = first.start;
        lines.push(format!(
            "Start at the {} corner of {} and {} and head {} on {}",
            start.quadrant,
            name(topology, StreetId::vertical(start.corner.vertical.0))?,
            name(topology, StreetId::horizontal(start.corner.horizontal.0))?,
            first.heading()?,
            name(topology, first.street()?)?,
        ));
    }

    for pair in path.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let t = transition(a, b)?;
        if t.silent {
            continue;
        }
        crossings += t.points();
        let cross = match t.crossing {
            Crossing::Neither => "don't cross".to_string(),
            Crossing::Both => "cross both streets".to_string(),
            Crossing::Street(axis) => {
                format!("cross {}", name(topology, a.end.corner.street(axis))?)
            }
        };
        lines.push(format!(
            "At {}, {} and {}",
            name(topology, a.ending_street()?)?,
            cross,
            turn_text(t.turn),
        ));
    }

    lines.push(DONE.to_string());
    Ok(Instructions { lines, crossings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::score;
    use labyrinth_core::{Corner, Quadrant};

    fn one_block() -> GridTopology {
        GridTopology::new(["A", "B"], ["P", "Q"]).unwrap()
    }

    fn block_loop() -> Vec<Segment> {
        vec![
            Segment::new(
                Corner::new(0, 0).at(Quadrant::NorthEast),
                Corner::new(1, 0).at(Quadrant::NorthWest),
            ),
            Segment::new(
                Corner::new(1, 0).at(Quadrant::SouthWest),
                Corner::new(1, 1).at(Quadrant::NorthWest),
            ),
            Segment::new(
                Corner::new(1, 1).at(Quadrant::NorthWest),
                Corner::new(0, 1).at(Quadrant::NorthEast),
            ),
            Segment::new(
                Corner::new(0, 1).at(Quadrant::NorthEast),
                Corner::new(0, 0).at(Quadrant::SouthEast),
            ),
        ]
    }

    #[test]
    fn renders_block_loop() {
        let out = render(&one_block(), &block_loop()).unwrap();
        assert_eq!(
            out.lines,
            vec![
                "Start at the northeast corner of A and P and head east on P",
                "At B, cross P and turn right",
                "At Q, don't cross and turn right",
                "At A, don't cross and turn right",
                "Done.",
            ]
        );
        assert_eq!(out.crossings, 1);
    }

    #[test]
    fn crossings_agree_with_score() {
        let path = block_loop();
        let out = render(&one_block(), &path).unwrap();
        assert_eq!(out.crossings, score(&path).unwrap().crossings);
    }

    #[test]
    fn straight_through_emits_nothing() {
        let g = GridTopology::new(["A", "B", "C"], ["P"]).unwrap();
        let path = vec![
            Segment::new(
                Corner::new(0, 0).at(Quadrant::SouthEast),
                Corner::new(1, 0).at(Quadrant::SouthWest),
            ),
            Segment::new(
                Corner::new(1, 0).at(Quadrant::SouthEast),
                Corner::new(2, 0).at(Quadrant::SouthWest),
            ),
        ];
        let out = render(&g, &path).unwrap();
        assert_eq!(
            out.lines,
            vec![
                "Start at the southeast corner of A and P and head east on P",
                "Done.",
            ]
        );
        assert_eq!(out.crossings, 0);
    }

    #[test]
    fn diagonal_and_uturn_text() {
        let g = GridTopology::new(["A", "B", "C"], ["P"]).unwrap();
        let there = Segment::new(
            Corner::new(0, 0).at(Quadrant::SouthEast),
            Corner::new(1, 0).at(Quadrant::SouthWest),
        );
        let across = Segment::new(
            Corner::new(1, 0).at(Quadrant::NorthEast),
            Corner::new(2, 0).at(Quadrant::NorthWest),
        );
        let out = render(&g, &[there, across, across.reversed()]).unwrap();
        assert_eq!(out.lines[1], "At B, cross both streets and continue straight");
        assert_eq!(out.lines[2], "At C, don't cross and head back the way you came");
        assert_eq!(out.crossings, 2);
    }

    #[test]
    fn empty_path_is_just_done() {
        let out = render(&one_block(), &[]).unwrap();
        assert_eq!(out.lines, vec![DONE]);
    }

    #[test]
    fn render_is_idempotent() {
        let g = one_block();
        let path = block_loop();
        assert_eq!(render(&g, &path), render(&g, &path));
    }

    #[test]
    fn unknown_street_is_error() {
        let g = one_block();
        let path = [Segment::new(
            Corner::new(4, 0).at(Quadrant::SouthEast),
            Corner::new(5, 0).at(Quadrant::SouthWest),
        )];
        assert!(matches!(
            render(&g, &path),
            Err(TopologyError::UnknownStreet { .. })
        ));
    }
}
