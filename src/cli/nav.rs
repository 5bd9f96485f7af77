use anyhow::Result;
use portfolio_navigation::{NavBar, RouteTable};

pub fn routes(routes: &RouteTable) -> Result<()> {
    for (route, path) in routes.iter() {
        println!("{:<20} {path}", route.as_ref());
    }

    Ok(())
}

#[tracing::instrument(skip(routes))]
pub fn nav(routes: &RouteTable, path: &str) -> Result<()> {
    let bar = NavBar::new(routes);
    print!("{}", bar.render(path)?);

    Ok(())
}
