use scholarchart::{headless::render_path, Environment};

/// Render every route without a browser and print what the document ends up holding.
fn main() -> scholarchart::Result<()> {
    scholarchart::init_logging();

    println!("ScholarChart Headless Example");
    println!("=============================");

    let visits = [
        ("/", Environment::Production),
        ("/sql-server-transaction-isolation-levels", Environment::Production),
        ("/missing", Environment::Production),
        ("/dev", Environment::Development),
    ];

    for (path, environment) in visits {
        let page = render_path(path, environment)?;
        println!("\n{} ({:?})", page.path, environment);
        println!("   Route: {}", page.route_path);
        println!("   Title: {}", page.title);
        println!("   Markup: {} bytes", page.markup.len());
        for event in &page.events {
            println!("   Event: {:?}", event);
        }
    }

    Ok(())
}
