use crate::constants::{CUBE_CONTAINER_ID, CUBE_ID, DRAGGING_CLASS};
use crate::core::{rotation_transform, PageError, RenderTarget};
use crate::dom;
use web_sys as web;

/// The cube element plus the container that carries the drag cursor.
pub struct CssCube {
    cube: web::HtmlElement,
    container: web::HtmlElement,
}

impl CssCube {
    pub fn find(document: &web::Document) -> Result<Self, PageError> {
        Ok(Self {
            cube: dom::html_element_by_id(document, CUBE_ID)?,
            container: dom::html_element_by_id(document, CUBE_CONTAINER_ID)?,
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }
}

impl RenderTarget for CssCube {
    fn apply_rotation(&mut self, rotation_x: f64, rotation_y: f64) {
        dom::set_style(
            &self.cube,
            "transform",
            &rotation_transform(rotation_x, rotation_y),
        );
    }

    fn set_dragging(&mut self, dragging: bool) {
        let classes = self.container.class_list();
        _ = if dragging {
            classes.add_1(DRAGGING_CLASS)
        } else {
            classes.remove_1(DRAGGING_CLASS)
        };
    }
}
