//! Fetches the red oaks of the Bronx and prints the rendered map contents.
//!
//! Run with `RUST_LOG=debug` to watch the fetch and render pass.

use arbormap::{render_batch, CoordinatePolicy, MapOptions, SocrataSource, TreeMap};

#[tokio::main]
async fn main() -> arbormap::Result<()> {
    env_logger::init();

    let source = SocrataSource::default();
    println!("querying {}", source.query_url());

    let records = source.fetch().await?;
    let group = render_batch(&records, CoordinatePolicy::default());

    let mut map = TreeMap::new(MapOptions::default());
    map.add_group(group);

    println!(
        "{} markers on the map (view: {:?} @ z{})",
        map.marker_count(),
        map.center(),
        map.zoom()
    );
    if let Some(bounds) = map.bounds() {
        println!("marker bounds center: {:?}", bounds.center());
    }

    println!("\n{}", map.legend().title());
    for entry in map.legend().entries() {
        println!("  {}  {}", entry.color, entry.label);
    }

    Ok(())
}
