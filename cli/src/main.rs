use bumpalo::Bump;
use clap::Parser;
use ddtree_core::{
    DataDefinition, DataDescriptionEntry, DataNode, DataSection, DataTree, Narrow, NodeId,
    StrongChildren, StrongParent, TypeDescription, sample,
};
use miette::{IntoDiagnostic, Result, miette};
use tracing::debug;

/// ddtree - Build and query a data division tree
#[derive(Parser, Debug)]
#[command(name = "ddtree")]
#[command(about = "Build the sample data division and look nodes up by address", long_about = None)]
struct Args {
    /// Do not print the tree before the lookups
    #[arg(long)]
    no_dump: bool,

    /// Add, remove and move a node between sections, printing child counts
    #[arg(long)]
    moves: bool,

    /// Addresses (or address suffixes) to look up
    #[arg(default_values = ["x", "POINT3D.x"])]
    queries: Vec<String>,
}

/// The address of the first match for `query`, followed by its subtree.
fn lookup_report(tree: &DataTree<'_>, query: &str) -> String {
    match tree.root_ref().find(query) {
        Some(node) => format!(
            "{query} -> {}\n{}",
            node.address().unwrap_or_default(),
            node.render()
        ),
        None => format!("{query} -> not found\n"),
    }
}

fn print_typedef(tree: &DataTree<'_>, name: &str) -> Result<()> {
    let Some(typedef) = tree.root_ref().find_as::<TypeDescription<'_, '_>>(name) else {
        println!("typedef {name} not found");
        return Ok(());
    };
    let parent = typedef
        .strong_parent()
        .into_diagnostic()?
        .ok_or_else(|| miette!("typedef {name} has no parent"))?;
    println!(
        "typedef:{}({}) < {},{} #{}",
        typedef.address().unwrap_or_default(),
        typedef.is_strong(),
        parent.address().unwrap_or_default(),
        parent.is_shared(),
        typedef.node().child_count()
    );
    for child in typedef.strong_children().into_diagnostic()? {
        println!(
            "child: {}({})",
            child.address().unwrap_or_default(),
            child.name()
        );
    }
    Ok(())
}

fn section_counts(tree: &DataTree<'_>, address: &str) -> Result<(usize, usize)> {
    let section = tree
        .root_ref()
        .find_as::<DataSection<'_, '_>>(address)
        .ok_or_else(|| miette!("section {address} not found"))?;
    let strong: Vec<DataDefinition<'_, '_>> = section.strong_children().into_diagnostic()?;
    Ok((section.node().child_count(), strong.len()))
}

fn section_id(tree: &DataTree<'_>, address: &str) -> Result<NodeId> {
    tree.find(tree.root(), address)
        .ok_or_else(|| miette!("section {address} not found"))
}

fn report(tree: &DataTree<'_>, label: &str, address: &str) -> Result<()> {
    let (generic, strong) = section_counts(tree, address)?;
    println!("{label:>13}: {generic} vs {strong}");
    Ok(())
}

fn run_moves<'a>(arena: &'a Bump, tree: &mut DataTree<'a>) -> Result<()> {
    let linkage = section_id(tree, "linkage")?;
    let toto = tree.create(DataNode::description(
        arena.alloc(DataDescriptionEntry::new("toto", 1)),
    ));

    report(tree, "before ADD", "linkage")?;
    tree.insert(linkage, toto).into_diagnostic()?;
    report(tree, "after ADD", "linkage")?;
    tree.detach_self(toto);
    report(tree, "after REMOVE", "linkage")?;

    let working = section_id(tree, "working")?;
    report(tree, "before MOVE", "working")?;
    tree.insert(working, toto).into_diagnostic()?;
    report(tree, "after MOVE", "working")?;
    debug!(address = ?tree.address(toto), "moved node");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let arena = Bump::new();
    let mut tree = sample::data_division(&arena).into_diagnostic()?;

    if !args.no_dump {
        print!("{tree}");
    }

    for query in &args.queries {
        print!("{}", lookup_report(&tree, query));
    }

    print_typedef(&tree, "POINT3D")?;
    print_typedef(&tree, "POINT2D")?;

    if args.moves {
        run_moves(&arena, &mut tree)?;
    }

    Ok(())
}
