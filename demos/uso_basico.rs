//! Ejemplo básico de uso del simulador del punto de control

use checkpoint_simulator::{config, MetricsCalculator, Simulation};

fn main() {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    // Correr el escenario base con distintas capacidades en la revisión de
    // identidad para ver el efecto de la congestión
    println!("| Capacidad revisión | Completados | Promedio (min) |");
    println!("|--------------------|-------------|----------------|");

    for capacity in [1, 2, 3, 4] {
        let mut cfg = config::default_config();
        cfg.id_check_capacity = capacity;

        let simulation = Simulation::new(cfg).expect("configuración válida");
        let metrics = simulation.run();

        let mean = metrics
            .mean_sojourn()
            .expect("el escenario base completa pasajeros");

        println!(
            "| {:>18} | {:>11} | {:>14} |",
            capacity,
            metrics.passengers_completed,
            MetricsCalculator::format_minutes(mean)
        );
    }

    // Reporte completo del escenario base
    let simulation = Simulation::new(config::default_config()).expect("configuración válida");
    let metrics = simulation.run();
    let report = MetricsCalculator::new()
        .generate_report(&metrics)
        .expect("el escenario base completa pasajeros");
    println!("{}", report);
}
