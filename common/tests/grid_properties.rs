use pixelgrid_common::{Color, PixelGrid, ProjectRecord, Zoom, zoom};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

/// A grid of the given shape with some cells painted
fn painted_grid() -> impl Strategy<Value = PixelGrid> {
    (1u32..=16, 1u32..=16).prop_flat_map(|(width, height)| {
        let len = (width * height) as usize;
        prop::collection::vec(prop::option::of(any_color()), len).prop_map(move |cells| {
            let mut grid = PixelGrid::new(width, height, Zoom::BASE).unwrap();
            for (index, cell) in cells.into_iter().enumerate() {
                if let Some(color) = cell {
                    grid.paint(index, color).unwrap();
                }
            }
            grid
        })
    })
}

#[test]
fn scenario_paint_then_snapshot() {
    let mut grid = PixelGrid::new(2, 2, Zoom::BASE).unwrap();
    grid.paint(0, "#ff0000".parse().unwrap()).unwrap();

    assert_eq!(
        grid.to_project_record(),
        ProjectRecord {
            grid_width: 2,
            grid_height: 2,
            pixel_color_list: vec![Some(Color::rgb(255, 0, 0)), None, None, None],
        }
    );
}

#[test]
fn scenario_short_color_list() {
    let mut grid = PixelGrid::new(2, 2, Zoom::BASE).unwrap();
    grid.paint(2, Color::rgb(9, 9, 9)).unwrap();
    let before = grid.clone();

    let text = r##"{"grid_width":2,"grid_height":2,"pixel_color_list":["#ff0000","",""]}"##;
    let record = ProjectRecord::from_json(text).unwrap();
    assert!(grid.load_project_record(&record).is_err());
    assert_eq!(grid, before);
}

proptest! {
    #[test]
    fn prop_apply_dimensions_yields_blank_cells(width in 1u32..=64, height in 1u32..=64) {
        let mut grid = PixelGrid::new(3, 3, Zoom::BASE).unwrap();
        grid.paint(4, Color::BLACK).unwrap();

        grid.apply_dimensions(width, height, None).unwrap();
        prop_assert_eq!(grid.cells().len(), (width * height) as usize);
        prop_assert!(grid.cells().iter().all(Option::is_none));
    }

    #[test]
    fn prop_record_round_trip(grid in painted_grid()) {
        let mut restored = PixelGrid::new(1, 1, Zoom::BASE).unwrap();
        restored.load_project_record(&grid.to_project_record()).unwrap();
        prop_assert_eq!(&restored, &grid);

        let text = grid.to_project_record().to_json().unwrap();
        let mut from_text = PixelGrid::new(1, 1, Zoom::BASE).unwrap();
        from_text.load_project_record(&ProjectRecord::from_json(&text).unwrap()).unwrap();
        prop_assert_eq!(&from_text, &grid);
    }

    #[test]
    fn prop_svg_has_one_rect_per_painted_cell(grid in painted_grid()) {
        let painted = grid.cells().iter().filter(|cell| cell.is_some()).count();
        prop_assert_eq!(grid.to_svg().matches("<rect").count(), painted);
    }

    #[test]
    fn prop_paint_then_clear_is_unset(
        grid in painted_grid(),
        pick in any::<prop::sample::Index>(),
        color in any_color()
    ) {
        let mut grid = grid;
        let index = pick.index(grid.cells().len());

        grid.paint(index, color).unwrap();
        prop_assert_eq!(grid.color_at(index), Some(color));
        grid.clear(index).unwrap();
        prop_assert_eq!(grid.color_at(index), None);
    }

    #[test]
    fn prop_zoom_stays_in_range(steps in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut grid = PixelGrid::new(1, 1, Zoom::BASE).unwrap();
        for zoom_in in steps {
            if zoom_in {
                grid.zoom_in();
            } else {
                grid.zoom_out();
            }

            let ratio = grid.zoom().ratio();
            prop_assert!((zoom::MIN_ZOOM..=zoom::MAX_ZOOM).contains(&ratio));
        }
    }
}
