use crate::constants::{PARTICLES_ID, PARTICLE_CLASS};
use crate::core::constants::PARTICLE_COUNT;
use crate::core::particles::generate_particles;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn spawn_particles(document: &web::Document) -> anyhow::Result<()> {
    let container = dom::html_element_by_id(document, PARTICLES_ID)?;
    let mut rng = rand::thread_rng();
    for spec in generate_particles(&mut rng, PARTICLE_COUNT) {
        let particle = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = particle.class_list().add_1(PARTICLE_CLASS);
        for (property, value) in spec.style_properties() {
            dom::set_style(&particle, property, &value);
        }
        container
            .append_child(&particle)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[page] spawned {} particles", PARTICLE_COUNT);
    Ok(())
}
