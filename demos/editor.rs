use grid_dijkstra::{Graph, GridResult, Point};
use std::io::{self, BufRead, Write};

// Interactive editor for a 5x5 grid. Coordinates are typed as `x,y`, with x growing to the right
// and y growing downwards.

const PROMPT: &str =
    "Wall block (b), wall (w), start (s), goal (g), clear (c) or path (p)? Type 'exit' when done";

fn parse_point(line: &str) -> Option<Point> {
    let (x, y) = line.trim().split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Prompts until a well-formed coordinate is entered. [None] once input runs out.
fn read_point<I>(lines: &mut I, label: &str) -> Option<Point>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{label} (x,y): ");
        io::stdout().flush().ok()?;
        let line = lines.next()?.ok()?;
        match parse_point(&line) {
            Some(p) => return Some(p),
            None => println!("Error, input two integers separated by a comma"),
        }
    }
}

fn report(result: GridResult<()>) {
    if let Err(e) = result {
        println!("{e}. Try again");
    }
}

fn search(graph: &mut Graph) {
    match graph.shortest_path() {
        Ok(Some(distance)) => println!("Shortest path: {distance}"),
        Ok(None) => println!("The goal cannot be reached"),
        Err(e) => println!("{e}"),
    }
}

fn main() {
    let mut graph = Graph::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Current grid:\n{graph}");
        println!("{PROMPT}");
        let Some(Ok(command)) = lines.next() else {
            break;
        };
        match command.trim() {
            "c" => graph.clear(),
            "b" => {
                if let Some(p) = read_point(&mut lines, "Block") {
                    report(graph.make_wall_block(p));
                }
            }
            "w" => {
                let Some(from) = read_point(&mut lines, "First point") else {
                    break;
                };
                let Some(to) = read_point(&mut lines, "Second point") else {
                    break;
                };
                report(graph.make_wall(from, to));
            }
            "s" => {
                if let Some(p) = read_point(&mut lines, "Start") {
                    report(graph.place_start(p));
                }
            }
            "g" => {
                if let Some(p) = read_point(&mut lines, "Goal") {
                    report(graph.place_goal(p));
                }
            }
            "p" => search(&mut graph),
            "exit" => {
                if graph.start().is_some() && graph.goal().is_some() {
                    search(&mut graph);
                    println!("{graph}");
                    break;
                }
                println!("You must choose both start and goal.");
            }
            _ => println!("Invalid choice. Try again"),
        }
    }
}
