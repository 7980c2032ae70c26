use comfy_table::{ContentArrangement, Table};

use berth_descriptor::ErrorReport;

use crate::commands::VarStatus;

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::NOTHING);
    table
}

pub fn print_vars(vars: &[VarStatus]) {
    let mut table = new_table();
    table.set_header(vec!["NAME", "STATUS"]);

    for v in vars {
        let status = if v.resolved { "set" } else { "missing" };
        table.add_row(vec![v.name.as_str(), status]);
    }

    println!("{table}");
}

/// Print an error report to stderr, one row per problem.
pub fn eprint_report(report: &ErrorReport) {
    if let Some(msg) = &report.malformed {
        eprintln!("malformed input: {msg}");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["FIELD", "PROBLEM"]);

    for u in &report.unresolved {
        table.add_row(vec![u.path.clone(), format!("unresolved placeholder '${{{}}}'", u.name)]);
    }
    for v in &report.violations {
        table.add_row(vec![v.path.clone(), v.message.clone()]);
    }

    eprintln!("{table}");
}
