//! Layered map generation.
//!
//! The map is a layered directed acyclic graph: `height + 2` floors (a lone
//! start node below, a final floor above), up to `width` nodes per floor,
//! edges only between consecutive floors. Which room occupies a node is
//! supplied by the caller, so content stays out of the graph logic.

use crate::core::GameRng;
use crate::dungeon::{DungeonState, GridPos, MapNode, Room};
use crate::error::Error;

/// Shape parameters for map generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapConfig {
    /// Maximum nodes per floor.
    pub width: usize,
    /// Number of regular floors (excluding start and final floors).
    pub height: usize,
    /// Minimum rooms placed per regular floor.
    pub min_rooms: usize,
    /// Maximum rooms placed per regular floor.
    pub max_rooms: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 7,
            min_rooms: 3,
            max_rooms: 4,
        }
    }
}

/// Where a node sits in the map, for room selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Floor {
    /// A regular floor, with its 1-based index.
    Regular(usize),
    /// The topmost floor.
    Final,
}

/// Generate a dungeon, asking `make_room` for each placed node's room.
///
/// Floor 0 holds the single start node at `(0, 0)`, which is also the
/// starting position. Every node on a floor links forward to the reachable
/// nodes of the next floor (column distance at most one, with a fallback to
/// the nearest column so no node is orphaned).
pub fn generate(
    config: &MapConfig,
    rng: &mut GameRng,
    mut make_room: impl FnMut(&mut GameRng, Floor) -> Room,
) -> Result<DungeonState, Error> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::EmptyDungeon);
    }
    let min_rooms = config.min_rooms.clamp(1, config.width);
    let max_rooms = config.max_rooms.clamp(min_rooms, config.width);

    let floors = config.height + 2;
    let mut columns: Vec<Vec<usize>> = Vec::with_capacity(floors);
    columns.push(vec![0]); // start floor
    for _ in 0..config.height {
        let count = rng.gen_range_usize(min_rooms..max_rooms + 1);
        let mut cols: Vec<usize> = (0..config.width).collect();
        rng.shuffle(&mut cols);
        cols.truncate(count);
        cols.sort_unstable();
        columns.push(cols);
    }
    columns.push(vec![0]); // final floor

    let mut graph: Vec<Vec<MapNode>> = columns
        .iter()
        .enumerate()
        .map(|(y, cols)| {
            (0..config.width)
                .map(|x| {
                    if !cols.contains(&x) {
                        return MapNode::empty();
                    }
                    let room = match y {
                        0 => Room::Start,
                        _ if y == floors - 1 => make_room(rng, Floor::Final),
                        _ => make_room(rng, Floor::Regular(y)),
                    };
                    MapNode::with_room(room)
                })
                .collect()
        })
        .collect();

    // Link each floor forward, then patch any unreached node on the next
    // floor with an edge from its nearest neighbour.
    for y in 0..floors - 1 {
        let next_cols = columns[y + 1].clone();
        for &x in &columns[y] {
            let near: Vec<usize> = next_cols
                .iter()
                .copied()
                .filter(|&nx| nx.abs_diff(x) <= 1)
                .collect();
            let targets = if near.is_empty() {
                vec![nearest_column(&next_cols, x)]
            } else {
                near
            };
            graph[y][x].edges = targets
                .into_iter()
                .map(|nx| GridPos { x: nx, y: y + 1 })
                .collect();
        }
        for &nx in &next_cols {
            let reached = columns[y]
                .iter()
                .any(|&x| graph[y][x].edges.contains(&GridPos { x: nx, y: y + 1 }));
            if !reached {
                let from = nearest_column(&columns[y], nx);
                graph[y][from].edges.push(GridPos { x: nx, y: y + 1 });
            }
        }
    }

    Ok(DungeonState::new(
        graph.into_iter().map(im::Vector::from).collect(),
    ))
}

fn nearest_column(columns: &[usize], x: usize) -> usize {
    columns
        .iter()
        .copied()
        .min_by_key(|&c| c.abs_diff(x))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Monster;

    fn monster_room(_rng: &mut GameRng, _floor: Floor) -> Room {
        Room::monster(vec![Monster::new(10)])
    }

    #[test]
    fn test_floor_count_includes_start_and_final() {
        let mut rng = GameRng::new(42);
        let config = MapConfig {
            width: 1,
            height: 3,
            min_rooms: 1,
            max_rooms: 1,
        };
        let dungeon = generate(&config, &mut rng, monster_room).unwrap();
        assert_eq!(dungeon.floors(), 5);
    }

    #[test]
    fn test_start_node_and_position() {
        let mut rng = GameRng::new(42);
        let dungeon = generate(&MapConfig::default(), &mut rng, monster_room).unwrap();

        assert_eq!(dungeon.x, 0);
        assert_eq!(dungeon.y, 0);
        assert!(dungeon.path_taken.is_empty());

        let start = dungeon.node(GridPos { x: 0, y: 0 }).unwrap();
        assert_eq!(start.room, Some(Room::Start));
        assert!(!start.did_visit);
    }

    #[test]
    fn test_every_floor_has_rooms_within_bounds(){
        let mut rng = GameRng::new(7);
        let config = MapConfig::default();
        let dungeon = generate(&config, &mut rng, monster_room).unwrap();

        for y in 1..dungeon.floors() - 1 {
            let rooms = (0..config.width)
                .filter(|&x| {
                    dungeon
                        .node(GridPos { x, y })
                        .is_some_and(|n| n.room.is_some())
                })
                .count();
            assert!((config.min_rooms..=config.max_rooms).contains(&rooms));
        }
    }

    #[test]
    fn test_edges_only_point_to_real_next_floor_rooms() {
        let mut rng = GameRng::new(3);
        let dungeon = generate(&MapConfig::default(), &mut rng, monster_room).unwrap();

        for y in 0..dungeon.floors() {
            for x in 0..6 {
                let Some(node) = dungeon.node(GridPos { x, y }) else {
                    continue;
                };
                for edge in &node.edges {
                    assert_eq!(edge.y, y + 1);
                    let target = dungeon.node(*edge).expect("edge target exists");
                    assert!(target.room.is_some(), "edge points at an empty slot");
                }
            }
        }
    }

    #[test]
    fn test_every_room_is_reachable() {
        let mut rng = GameRng::new(11);
        let config = MapConfig::default();
        let dungeon = generate(&config, &mut rng, monster_room).unwrap();

        for y in 1..dungeon.floors() {
            for x in 0..config.width {
                let Some(node) = dungeon.node(GridPos { x, y }) else {
                    continue;
                };
                if node.room.is_none() {
                    continue;
                }
                let reached = (0..config.width).any(|px| {
                    dungeon
                        .node(GridPos { x: px, y: y - 1 })
                        .is_some_and(|p| p.edges.contains(&GridPos { x, y }))
                });
                assert!(reached, "node ({x}, {y}) has no incoming edge");
            }
        }
    }

    #[test]
    fn test_degenerate_shapes_fail() {
        let mut rng = GameRng::new(1);
        for config in [
            MapConfig {
                width: 0,
                height: 3,
                min_rooms: 1,
                max_rooms: 1,
            },
            MapConfig {
                width: 3,
                height: 0,
                min_rooms: 1,
                max_rooms: 1,
            },
        ] {
            assert_eq!(
                generate(&config, &mut rng, monster_room),
                Err(Error::EmptyDungeon)
            );
        }
    }
}
