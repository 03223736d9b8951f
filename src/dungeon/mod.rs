//! The dungeon: a layered graph of rooms.
//!
//! `graph[y][x]` addresses the node at column `x` of floor `y`. Floors are
//! crossed bottom-up; the path taken is an append-only trail. The engine only
//! consumes the completion predicates here; pathfinding and presentation
//! belong to collaborators.

mod map;
mod room;

pub use map::{generate, Floor, MapConfig};
pub use room::{CampfireChoice, Reward, RewardKind, Room};

use im::Vector;
use serde::{Deserialize, Serialize};

/// A position in the dungeon grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

/// One slot in the dungeon grid.
///
/// A slot without a room is empty space; edges name the reachable nodes on
/// the floor above.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNode {
    pub room: Option<Room>,
    pub did_visit: bool,
    pub edges: Vec<GridPos>,
}

impl MapNode {
    /// An empty slot (no room, nothing to visit).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A node occupied by a room.
    #[must_use]
    pub fn with_room(room: Room) -> Self {
        Self {
            room: Some(room),
            did_visit: false,
            edges: Vec::new(),
        }
    }
}

/// The dungeon portion of a game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonState {
    /// `graph[y][x]`: floors bottom-up, columns left to right.
    pub graph: Vector<Vector<MapNode>>,
    /// Current column.
    pub x: usize,
    /// Current floor.
    pub y: usize,
    /// Append-only trail of visited positions.
    pub path_taken: Vector<GridPos>,
}

impl DungeonState {
    /// Wrap a graph with the starting position at `(0, 0)`.
    #[must_use]
    pub fn new(graph: Vector<Vector<MapNode>>) -> Self {
        Self {
            graph,
            x: 0,
            y: 0,
            path_taken: Vector::new(),
        }
    }

    /// Number of floors.
    #[must_use]
    pub fn floors(&self) -> usize {
        self.graph.len()
    }

    /// The node at a position, if the position exists.
    #[must_use]
    pub fn node(&self, pos: GridPos) -> Option<&MapNode> {
        self.graph.get(pos.y)?.get(pos.x)
    }

    pub fn node_mut(&mut self, pos: GridPos) -> Option<&mut MapNode> {
        self.graph.get_mut(pos.y)?.get_mut(pos.x)
    }

    /// The node the player currently occupies.
    #[must_use]
    pub fn current_node(&self) -> Option<&MapNode> {
        self.node(GridPos {
            x: self.x,
            y: self.y,
        })
    }

    pub fn current_node_mut(&mut self) -> Option<&mut MapNode> {
        let pos = GridPos {
            x: self.x,
            y: self.y,
        };
        self.node_mut(pos)
    }

    /// Whole-dungeon completion: every floor has at least one completed room.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.graph.iter().all(|floor| {
            floor
                .iter()
                .any(|node| node.room.as_ref().is_some_and(Room::is_completed))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Monster;

    /// A 1-wide dungeon with the given rooms stacked above a start node.
    fn column_dungeon(rooms: Vec<Room>) -> DungeonState {
        let mut graph: Vector<Vector<MapNode>> = Vector::new();
        graph.push_back(Vector::from(vec![MapNode::with_room(Room::Start)]));
        for room in rooms {
            graph.push_back(Vector::from(vec![MapNode::with_room(room)]));
        }
        DungeonState::new(graph)
    }

    #[test]
    fn test_node_lookup() {
        let dungeon = column_dungeon(vec![Room::monster(vec![Monster::new(5)])]);

        assert!(dungeon.node(GridPos { x: 0, y: 0 }).is_some());
        assert!(dungeon.node(GridPos { x: 0, y: 1 }).is_some());
        assert!(dungeon.node(GridPos { x: 1, y: 0 }).is_none());
        assert!(dungeon.node(GridPos { x: 0, y: 9 }).is_none());
    }

    #[test]
    fn test_current_node_follows_position() {
        let mut dungeon = column_dungeon(vec![Room::campfire()]);
        assert_eq!(dungeon.current_node().unwrap().room, Some(Room::Start));

        dungeon.y = 1;
        assert!(matches!(
            dungeon.current_node().unwrap().room,
            Some(Room::Campfire { .. })
        ));
    }

    #[test]
    fn test_dungeon_completion_needs_every_floor() {
        let mut dungeon = column_dungeon(vec![
            Room::monster(vec![Monster::new(5)]),
            Room::monster(vec![Monster::new(7)]),
        ]);
        assert!(!dungeon.is_completed());

        dungeon
            .node_mut(GridPos { x: 0, y: 1 })
            .unwrap()
            .room
            .as_mut()
            .unwrap()
            .monsters_mut()
            .unwrap()[0]
            .current_health = 0;
        assert!(!dungeon.is_completed(), "one floor still uncleared");

        dungeon
            .node_mut(GridPos { x: 0, y: 2 })
            .unwrap()
            .room
            .as_mut()
            .unwrap()
            .monsters_mut()
            .unwrap()[0]
            .current_health = -2;
        assert!(dungeon.is_completed());
    }
}
