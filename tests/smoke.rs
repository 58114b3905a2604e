use anyhow::{anyhow, Context, Result};
use calc::test_impls::RunList;

#[test]
fn smoke() -> Result<()> {
    for run in RunList::open(include_str!("smoke.toml"))
        .expect("static asset")
        .runs
    {
        run.check()
            .with_context(|| anyhow!("testing {:?}", run.expr))?;
    }
    Ok(())
}

#[test]
fn idempotent() -> Result<()> {
    for run in RunList::open(include_str!("smoke.toml"))?.runs {
        let first = calc::evaluate_expression(&run.expr);
        let second = calc::evaluate_expression(&run.expr);
        assert_eq!(first, second, "{:?}", run.expr);
    }
    Ok(())
}

#[test]
fn parallel() -> Result<()> {
    let runs = RunList::open(include_str!("smoke.toml"))?.runs;
    std::thread::scope(|s| {
        let handles: Vec<_> = runs
            .iter()
            .map(|run| s.spawn(move || run.check()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("no panics"))
            .collect::<Result<Vec<()>>>()
    })?;
    Ok(())
}
