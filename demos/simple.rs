use grid_dijkstra::solver::dijkstra::DijkstraSolver;
use grid_dijkstra::{Category, Graph, Point, ValueGrid};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |s#  g|
// | #   |
// | #   |
// | #   |
// |     |
//  _____
// where
// - # marks a wall
// - s marks the start
// - g marks the goal
fn main() {
    let mut graph = Graph::new(5, 5, Category::Empty);
    graph.place_start(Point::new(0, 0)).unwrap();
    graph.place_goal(Point::new(4, 0)).unwrap();
    graph.make_wall(Point::new(1, 0), Point::new(1, 3)).unwrap();
    println!("{}", graph);
    match graph.find_path_with(&DijkstraSolver).unwrap() {
        Some((distance, path)) => {
            println!("A path of length {} has been found:", distance);
            for p in path {
                println!("{:?}", p);
            }
            println!("{}", graph);
        }
        None => println!("The goal cannot be reached"),
    }
}
