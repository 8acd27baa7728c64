use clap::Parser;

use checkpoint_simulator::{config, MetricsCalculator, Simulation, SimulationConfig};

/// Simulador de eventos discretos de un punto de control de seguridad
/// aeroportuaria: revisión de identidad seguida de un banco de escáneres
/// personales en paralelo.
#[derive(Debug, Parser)]
#[command(name = "checkpoint-simulator", version)]
struct Cli {
    /// Tasa de llegadas λ, en pasajeros por minuto
    #[arg(long, default_value_t = config::ARRIVAL_RATE)]
    arrival_rate: f64,

    /// Capacidad de la revisión de identidad
    #[arg(long, default_value_t = config::ID_CHECK_CAPACITY)]
    id_capacity: usize,

    /// Tiempo medio de la revisión de identidad, en minutos
    #[arg(long, default_value_t = config::ID_CHECK_MEAN)]
    id_mean: f64,

    /// Cantidad de escáneres personales en paralelo
    #[arg(long, default_value_t = config::SCREENING_STATIONS)]
    scanners: usize,

    /// Capacidad de cada escáner personal
    #[arg(long, default_value_t = config::SCREENING_CAPACITY)]
    scanner_capacity: usize,

    /// Cota inferior del tiempo de escaneo, en minutos
    #[arg(long, default_value_t = config::SCREENING_MIN)]
    scan_min: f64,

    /// Cota superior del tiempo de escaneo, en minutos
    #[arg(long, default_value_t = config::SCREENING_MAX)]
    scan_max: f64,

    /// Horizonte de la simulación, en minutos simulados
    #[arg(long, default_value_t = config::HORIZON)]
    horizon: f64,

    /// Semilla del generador aleatorio (misma semilla, misma corrida)
    #[arg(long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Mostrar el detalle de cada evento de la simulación
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            arrival_rate: self.arrival_rate,
            id_check_capacity: self.id_capacity,
            id_check_mean: self.id_mean,
            screening_stations: self.scanners,
            screening_capacity: self.scanner_capacity,
            screening_min: self.scan_min,
            screening_max: self.scan_max,
            horizon: self.horizon,
            seed: Some(self.seed),
        }
    }
}

fn main() {
    // ---------- CLI ----------
    let cli = Cli::parse();

    // ---------- LOGGING ----------
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // ---------- CONFIGURACIÓN ----------
    println!("=== Simulación del punto de control de seguridad ===");
    println!("Configuración:");
    println!("  Tasa de llegadas:        {} pasajeros/min", cli.arrival_rate);
    println!(
        "  Revisión de identidad:   capacidad {}, media {} min",
        cli.id_capacity, cli.id_mean
    );
    println!(
        "  Escáneres personales:    {} × capacidad {}, Uniforme[{}, {}] min",
        cli.scanners, cli.scanner_capacity, cli.scan_min, cli.scan_max
    );
    println!("  Horizonte:               {} min", cli.horizon);
    println!("  Semilla:                 {}", cli.seed);

    // ---------- SIMULACIÓN ----------
    let simulation = Simulation::new(cli.to_config()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let metrics = simulation.run();

    // ---------- REPORTE ----------
    let calculator = MetricsCalculator::new();
    let report = calculator.generate_report(&metrics).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", report);

    let mean = metrics
        .mean_sojourn()
        .expect("el reporte ya verificó que hay pasajeros completados");
    println!(
        "Tiempo promedio en el sistema: {} minutos",
        MetricsCalculator::format_minutes(mean)
    );
}
