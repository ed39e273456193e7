use jc_core::{Canvas, CanvasId, Color, Edge, Node, NodeKind, Side, to_json_string};
use std::env;
use std::fs;
use std::process::ExitCode;

/// Assemble a small demonstration canvas and print (or write) its
/// encoded form. Pass a path to write a `.canvas` file instead of
/// printing to stdout.
fn main() -> ExitCode {
    env_logger::init();

    let canvas = match build() {
        Ok(canvas) => canvas,
        Err(e) => {
            eprintln!("failed to build canvas: {e}");
            return ExitCode::FAILURE;
        }
    };

    let encoded = to_json_string(&canvas);
    match env::args().nth(1) {
        Some(path) => {
            if let Err(e) = fs::write(&path, &encoded) {
                eprintln!("ERROR writing {path}: {e}");
                return ExitCode::FAILURE;
            }
            println!("canvas written to {path}");
        }
        None => println!("{encoded}"),
    }
    ExitCode::SUCCESS
}

fn build() -> jc_core::Result<Canvas> {
    let mut canvas = Canvas::new();

    let title = Node::new(
        CanvasId::intern("title"),
        100,
        100,
        400,
        100,
        NodeKind::Text {
            text: "# Example Canvas\n\nBuilt with jc-core".into(),
        },
    )?
    .with_color(Color::parse("#4285F4").expect("valid hex"));
    canvas.add_node(title)?;

    let info = Node::new(
        CanvasId::intern("info"),
        600,
        100,
        300,
        100,
        NodeKind::Text {
            text: "This is a simple example canvas.".into(),
        },
    )?
    .with_color(Color::Preset(2));
    canvas.add_node(info)?;

    let mut edge = Edge::new(
        CanvasId::intern("edge1"),
        CanvasId::intern("title"),
        CanvasId::intern("info"),
    );
    edge.from_side = Some(Side::Right);
    edge.to_side = Some(Side::Left);
    edge.label = Some("Connection".into());
    canvas.add_edge(edge)?;

    Ok(canvas)
}
