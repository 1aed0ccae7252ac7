use clap::{arg, command, Command};
use comb::Pascal;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .arg(arg!(n: [N] "Set size").allow_hyphen_values(true))
        .arg(arg!(k: [K] "Subset size").allow_hyphen_values(true))
        .subcommand(Command::new("table").arg(arg!(rows: <ROWS> "Number of rows to print")))
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("table") {
        let rows: usize = matches.get_one::<String>("rows").unwrap().parse()?;
        print_table(rows);
    } else {
        let (n, k) = match (matches.get_one::<String>("n"), matches.get_one::<String>("k")) {
            (Some(n), Some(k)) => (n.parse::<i64>()?, k.parse::<i64>()?),
            _ => anyhow::bail!("expected <N> <K>, or the `table` subcommand"),
        };

        log::debug!("computing {n}-comb-{k}");
        let value = comb::comb(n, k)?;
        println!("{n}-comb-{k}: {value}");
    }

    Ok(())
}

fn print_table(rows: usize) {
    let mut pascal = Pascal::new();
    for n in 0..rows {
        for (k, value) in pascal.row(n).iter().enumerate() {
            println!("{n}-comb-{k}: {value}");
        }
    }
}
