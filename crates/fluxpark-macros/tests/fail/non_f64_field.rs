use fluxpark_macros::GridFields;

#[derive(GridFields)]
pub struct BadCell {
    pub rain: f64,
    pub landuse: i32,
}

fn main() {}
