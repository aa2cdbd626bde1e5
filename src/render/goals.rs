//! Goal Rendering
//!
//! Turns goals into grid cells: an `img` followed by a `div.description`,
//! wrapped in a `div.cell` (plus `done` when the goal is completed).

use crate::dom::Element;
use crate::loader::Goal;

/// Default number of cells in the grid (a 5x5 board)
pub const DEFAULT_MAX_CELLS: usize = 25;

/// Default prefix joined with each goal's image file name
pub const DEFAULT_IMAGE_PREFIX: &str = "assets/images/";

/// Builds grid cells from goals
#[derive(Debug, Clone)]
pub struct GoalRenderer {
    max_cells: usize,
    image_prefix: String,
}

impl Default for GoalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS, DEFAULT_IMAGE_PREFIX)
    }
}

impl GoalRenderer {
    pub fn new(max_cells: usize, image_prefix: impl Into<String>) -> Self {
        Self {
            max_cells,
            image_prefix: image_prefix.into(),
        }
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    pub fn image_prefix(&self) -> &str {
        &self.image_prefix
    }

    /// Image for the goal; the description doubles as alt text for broken links
    pub fn create_image_element(&self, goal: &Goal) -> Element {
        Element::new("img")
            .attr("src", format!("{}{}", self.image_prefix, goal.image))
            .attr("alt", goal.description.as_str())
    }

    pub fn create_description_element(&self, goal: &Goal) -> Element {
        Element::new("div")
            .class("description")
            .text(goal.description.as_str())
    }

    /// Empty cell whose class depends on whether the goal is done
    pub fn create_grid_cell(&self, goal: &Goal) -> Element {
        let class_name = if goal.done { "cell done" } else { "cell" };
        Element::new("div").class(class_name)
    }

    /// Convert the first `max_cells` goals into complete grid cells
    pub fn convert_goals_to_grid_cells(&self, goals: &[Goal]) -> Vec<Element> {
        if goals.len() > self.max_cells {
            tracing::debug!(
                total = goals.len(),
                shown = self.max_cells,
                "Dropping goals beyond the grid size"
            );
        }

        goals
            .iter()
            .take(self.max_cells)
            .map(|goal| {
                self.create_grid_cell(goal)
                    .child(self.create_image_element(goal))
                    .child(self.create_description_element(goal))
            })
            .collect()
    }
}

/// Append cells to the grid container, preserving their order
pub fn append_cells_to_grid(grid: &mut Element, cells: Vec<Element>) {
    grid.extend(cells);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(n: usize) -> Vec<Goal> {
        (0..n)
            .map(|i| Goal::new(format!("Goal {}", i), format!("{}.png", i), i % 2 == 0))
            .collect()
    }

    #[test]
    fn test_image_element() {
        let renderer = GoalRenderer::default();
        let img = renderer.create_image_element(&Goal::new("A", "b.png", true));

        assert_eq!(img.tag(), "img");
        assert_eq!(img.attribute("src"), Some("assets/images/b.png"));
        assert_eq!(img.attribute("alt"), Some("A"));
    }

    #[test]
    fn test_description_element() {
        let renderer = GoalRenderer::default();
        let desc = renderer.create_description_element(&Goal::new("Learn Rust", "rust.png", false));

        assert_eq!(desc.tag(), "div");
        assert_eq!(desc.class_list(), vec!["description"]);
        assert_eq!(desc.text_content(), "Learn Rust");
    }

    #[test]
    fn test_grid_cell_classes() {
        let renderer = GoalRenderer::default();

        let done = renderer.create_grid_cell(&Goal::new("A", "a.png", true));
        assert_eq!(done.attribute("class"), Some("cell done"));

        let open = renderer.create_grid_cell(&Goal::new("B", "b.png", false));
        assert_eq!(open.attribute("class"), Some("cell"));
        assert!(!open.has_class("done"));
    }

    #[test]
    fn test_cell_children_order() {
        let renderer = GoalRenderer::default();
        let cells = renderer.convert_goals_to_grid_cells(&[Goal::new("A", "b.png", true)]);

        assert_eq!(cells.len(), 1);
        let children = cells[0].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "img");
        assert!(children[1].has_class("description"));
    }

    #[test]
    fn test_cell_count_up_to_limit() {
        let renderer = GoalRenderer::default();

        for n in [0, 1, 24, 25] {
            assert_eq!(renderer.convert_goals_to_grid_cells(&goals(n)).len(), n);
        }
    }

    #[test]
    fn test_truncates_to_first_entries() {
        let renderer = GoalRenderer::default();
        let cells = renderer.convert_goals_to_grid_cells(&goals(30));

        assert_eq!(cells.len(), 25);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.children()[1].text_content(), format!("Goal {}", i));
        }
    }

    #[test]
    fn test_custom_limit_and_prefix() {
        let renderer = GoalRenderer::new(4, "/static/");
        let cells = renderer.convert_goals_to_grid_cells(&goals(9));

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].children()[0].attribute("src"), Some("/static/0.png"));
    }

    #[test]
    fn test_append_cells_preserves_order() {
        let renderer = GoalRenderer::default();
        let mut grid = Element::new("div").attr("id", "grid");
        grid.append(Element::new("div").class("existing"));

        append_cells_to_grid(&mut grid, renderer.convert_goals_to_grid_cells(&goals(3)));

        assert_eq!(grid.children().len(), 4);
        assert!(grid.children()[0].has_class("existing"));
        assert_eq!(grid.children()[3].children()[1].text_content(), "Goal 2");
    }
}
