use dioxus::prelude::*;

const PARTICLE_COUNT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
    opacity: f64,
}

/// Decorative floating dots behind the page. Positions are randomized once
/// per mount; the drift itself is pure CSS animation.
#[component]
pub fn ParticlesBackground() -> Element {
    let particles = use_signal(spawn_particles);

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for particle in particles().into_iter() {
                div {
                    class: "particle",
                    style: "left: {particle.left:.2}%; top: {particle.top:.2}%; animation-delay: {particle.delay:.2}s; opacity: {particle.opacity:.2};",
                }
            }
        }
    }
}

fn spawn_particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left: random() * 100.0,
            top: random() * 100.0,
            delay: random() * 20.0,
            opacity: random() * 0.6 + 0.2,
        })
        .collect()
}

fn random() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}
