use grid_dijkstra::{
    solver::{dijkstra::DijkstraSolver, heap::HeapSolver},
    Category, Graph, GridError, Point, ValueGrid,
};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// The detour around a wall hanging from the top row of a 5x5 grid.
#[test]
fn detour_around_wall() {
    //  _____
    // |s#  g|
    // | #   |
    // | #   |
    // | #   |
    // |     |
    //  _____
    let mut graph = Graph::new(5, 5, Category::Empty);
    graph.place_start(p(0, 0)).unwrap();
    graph.place_goal(p(4, 0)).unwrap();
    graph.make_wall(p(1, 0), p(1, 3)).unwrap();
    let (distance, path) = graph.find_path_with(&DijkstraSolver).unwrap().unwrap();
    assert_eq!(distance, 12);
    assert_eq!(path.len(), 13);
    assert_eq!(path.first(), Some(&p(0, 0)));
    assert_eq!(path.last(), Some(&p(4, 0)));
    // The only way past the wall is down column 0 and along row 4
    for y in 1..=4 {
        assert_eq!(path[y as usize], p(0, y));
        assert_eq!(graph.get(0, y), Category::Path);
    }
    assert_eq!(path[5], p(1, 4));
    assert_eq!(graph.get(1, 4), Category::Path);
    // Start and goal keep their categories
    assert_eq!(graph.get(0, 0), Category::Start);
    assert_eq!(graph.get(4, 0), Category::Goal);
    let marked = graph
        .nodes()
        .iter()
        .filter(|n| n.category == Category::Path)
        .count();
    assert_eq!(marked, 11);
    // Ties go to the lowest index, which turns up column 2 as soon as possible
    //  _____
    // |s#..g|
    // |.#.  |
    // |.#.  |
    // |.#.  |
    // |...  |
    //  _____
    let expected = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 4),
        (2, 4),
        (2, 3),
        (2, 2),
        (2, 1),
        (2, 0),
        (3, 0),
        (4, 0),
    ]
    .map(|(x, y)| p(x, y));
    assert_eq!(path, expected.to_vec());
}

#[test]
fn detour_around_wall_with_heap() {
    let mut graph = Graph::default();
    graph.place_start(p(0, 0)).unwrap();
    graph.place_goal(p(4, 0)).unwrap();
    graph.make_wall(p(1, 0), p(1, 3)).unwrap();
    assert_eq!(graph.shortest_path_with(&HeapSolver), Ok(Some(12)));
}

#[test]
fn encircled_goal_is_not_found() {
    for use_components in [true, false] {
        let mut graph = Graph::default();
        graph.use_components = use_components;
        graph.place_start(p(0, 0)).unwrap();
        graph.place_goal(p(2, 2)).unwrap();
        graph.make_wall(p(1, 1), p(3, 1)).unwrap();
        graph.make_wall(p(1, 3), p(3, 3)).unwrap();
        graph.make_wall_block(p(1, 2)).unwrap();
        graph.make_wall_block(p(3, 2)).unwrap();
        assert_eq!(graph.shortest_path(), Ok(None));
        assert!(graph
            .nodes()
            .iter()
            .all(|n| n.category != Category::Path));
    }
}

#[test]
fn adjacent_start_and_goal() {
    let mut graph = Graph::default();
    graph.place_start(p(2, 2)).unwrap();
    graph.place_goal(p(2, 3)).unwrap();
    assert_eq!(graph.shortest_path(), Ok(Some(1)));
    assert!(graph
        .nodes()
        .iter()
        .all(|n| n.category != Category::Path));
}

#[test]
fn rejected_wall_leaves_grid_untouched() {
    let mut graph = Graph::default();
    graph.place_start(p(0, 0)).unwrap();
    let before = format!("{}", graph);
    assert_eq!(
        graph.make_wall(p(0, 1), p(3, 4)),
        Err(GridError::NotColinear(p(0, 1), p(3, 4)))
    );
    assert_eq!(format!("{}", graph), before);
}

#[test]
fn rectangular_grid() {
    //  _______
    // |s  #   |
    // |   # # |
    // |     #g|
    //  _______
    let mut graph = Graph::new(7, 3, Category::Empty);
    graph.place_start(p(0, 0)).unwrap();
    graph.place_goal(p(6, 2)).unwrap();
    graph.make_wall(p(3, 0), p(3, 1)).unwrap();
    graph.make_wall(p(5, 1), p(5, 2)).unwrap();
    assert_eq!(graph.shortest_path(), Ok(Some(12)));
}

#[test]
fn rendering_after_search() {
    let mut graph = Graph::new(3, 3, Category::Empty);
    graph.place_start(p(0, 0)).unwrap();
    graph.place_goal(p(2, 0)).unwrap();
    graph.make_wall_block(p(1, 0)).unwrap();
    assert_eq!(graph.shortest_path(), Ok(Some(4)));
    assert_eq!(format!("{}", graph), "[s # g]\n[. . .]\n[     ]\n");
}
