use fluxpark_macros::GridFields;

#[derive(Debug, Clone, Copy, GridFields)]
pub struct TestCell {
    /// Rain [mm/d].
    pub rain: f64,
    pub throughfall: f64,
    pub store: f64,
}

fn main() {
    let cells = [
        TestCell { rain: 1.0, throughfall: 0.5, store: 0.5 },
        TestCell { rain: 2.0, throughfall: 1.5, store: 0.5 },
        TestCell { rain: 3.0, throughfall: 2.5, store: 0.5 },
        TestCell { rain: 4.0, throughfall: 3.5, store: 0.5 },
    ];
    let grids = TestCellGrids::from_cells((2, 2), &cells);
    assert_eq!(grids.shape(), (2, 2));
    assert_eq!(grids.rain[[1, 0]], 3.0);
    assert_eq!(grids.cell((0, 1)).throughfall, 1.5);
    assert_eq!(grids.get("store").map(|g| g.sum()), Some(2.0));
    assert!(grids.get("missing").is_none());
    assert_eq!(TestCellGrids::LEN, 3);
    assert_eq!(TestCell::field_names(), &["rain", "throughfall", "store"]);
    assert_eq!(TestCellGrids::field_names(), TestCell::field_names());

    let names: Vec<&str> = grids.clone().into_named().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["rain", "throughfall", "store"]);

    let uniform = TestCellGrids::uniform((3, 1), &cells[0]);
    assert_eq!(uniform.shape(), (3, 1));
    assert!(uniform.rain.iter().all(|&v| v == 1.0));
}
