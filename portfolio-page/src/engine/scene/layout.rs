use bevy::math::Vec3;
use constants::scene::PARTICLE_COLOUR_MIN;
use rand::Rng;

/// Node positions and the index pairs joined by connectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterLayout {
    pub nodes: Vec<Vec3>,
    pub connectors: Vec<(usize, usize)>,
}

impl ClusterLayout {
    pub fn connector_endpoints(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.connectors
            .iter()
            .map(|&(a, b)| (self.nodes[a], self.nodes[b]))
    }
}

/// Per-particle positions and vertex colours, parallel vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleLayout {
    pub positions: Vec<[f32; 3]>,
    pub colours: Vec<[f32; 4]>,
}

impl ParticleLayout {
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

/// Uniform sample in `[-spread / 2, spread / 2)`.
pub fn spread_sample<R: Rng>(rng: &mut R, spread: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * spread
}

fn point_in_cube<R: Rng>(rng: &mut R, spread: f32) -> Vec3 {
    let x = spread_sample(rng, spread);
    let y = spread_sample(rng, spread);
    let z = spread_sample(rng, spread);
    Vec3::new(x, y, z)
}

/// Scatter `node_count` nodes in a cube, then join each unordered pair
/// independently with `probability`.
pub fn generate_cluster<R: Rng>(
    rng: &mut R,
    node_count: usize,
    spread: f32,
    probability: f64,
) -> ClusterLayout {
    let nodes: Vec<Vec3> = (0..node_count)
        .map(|_| point_in_cube(rng, spread))
        .collect();

    let mut connectors = Vec::new();
    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            if rng.random::<f64>() < probability {
                connectors.push((a, b));
            }
        }
    }

    ClusterLayout { nodes, connectors }
}

pub fn generate_particles<R: Rng>(
    rng: &mut R,
    particle_count: usize,
    spread: f32,
) -> ParticleLayout {
    let mut positions = Vec::with_capacity(particle_count);
    let mut colours = Vec::with_capacity(particle_count);

    for _ in 0..particle_count {
        positions.push(point_in_cube(rng, spread).to_array());

        let mut channel =
            || PARTICLE_COLOUR_MIN + rng.random::<f32>() * (1.0 - PARTICLE_COLOUR_MIN);
        colours.push([channel(), channel(), channel(), 1.0]);
    }

    ParticleLayout { positions, colours }
}

/// Mean connector count for `node_count` nodes at `probability`.
pub fn expected_connectors(node_count: usize, probability: f64) -> f64 {
    let pairs = node_count * node_count.saturating_sub(1) / 2;
    pairs as f64 * probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn node_count_is_fixed_for_any_seed() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = generate_cluster(&mut rng, 50, 100.0, 0.05);
            assert_eq!(layout.nodes.len(), 50);
        }
    }

    #[test]
    fn nodes_stay_inside_cube() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = generate_cluster(&mut rng, 200, 100.0, 0.0);
        for node in &layout.nodes {
            assert!(node.abs().max_element() <= 50.0);
        }
        assert!(layout.connectors.is_empty());
    }

    #[test]
    fn connectors_are_unique_ordered_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        let layout = generate_cluster(&mut rng, 30, 100.0, 1.0);

        assert_eq!(layout.connectors.len(), 30 * 29 / 2);
        assert!(layout.connectors.iter().all(|&(a, b)| a < b && b < 30));
    }

    #[test]
    fn connector_count_varies_but_tracks_expectation() {
        let (nodes, p) = (50, 0.05);
        let expected = expected_connectors(nodes, p);
        assert!((expected - 61.25).abs() < 1e-9);

        let counts: Vec<usize> = (0..200)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_cluster(&mut rng, nodes, 100.0, p).connectors.len()
            })
            .collect();

        let distinct: std::collections::BTreeSet<_> = counts.iter().collect();
        assert!(distinct.len() > 1, "topology should differ between seeds");

        // Binomial(1225, 0.05): sd ~ 7.6, so the mean of 200 runs has sd ~ 0.54
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        assert!((mean - expected).abs() < 4.0, "mean {mean}");

        // Individual runs beyond 8 sd would indicate a broken trial
        assert!(counts.iter().all(|&c| (c as f64 - expected).abs() < 61.0));
    }

    #[test]
    fn same_seed_reproduces_layout() {
        let build = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let cluster = generate_cluster(&mut rng, 50, 100.0, 0.05);
            let particles = generate_particles(&mut rng, 100, 200.0);
            (cluster, particles)
        };

        assert_eq!(build(42), build(42));
        assert_ne!(build(42).0, build(43).0);
    }

    #[test]
    fn particles_respect_bounds_and_colour_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let particles = generate_particles(&mut rng, 5000, 200.0);

        assert_eq!(particles.count(), 5000);
        assert_eq!(particles.colours.len(), 5000);

        for position in &particles.positions {
            assert!(position.iter().all(|c| (-100.0..=100.0).contains(c)));
        }
        for colour in &particles.colours {
            assert!(colour[..3].iter().all(|c| (0.5..=1.0).contains(c)));
            assert_eq!(colour[3], 1.0);
        }
    }
}
