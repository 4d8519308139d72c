use fluxpark_macros::GridFields;

#[derive(Debug, Clone, Copy, GridFields)]
#[grid(name = "StoreGrids")]
pub struct StoreCell {
    pub store: f64,
    pub deficit: f64,
}

fn main() {
    let s = StoreCell { store: 1.5, deficit: 20.0 };
    let grids = StoreGrids::uniform((4, 5), &s);
    assert_eq!(grids.shape(), (4, 5));
    assert_eq!(grids.named().len(), 2);
    assert_eq!(StoreCell::field_names(), &["store", "deficit"]);
}
