//! # Módulo de Simulación Principal
//!
//! Este módulo contiene la lógica principal para ejecutar la simulación del
//! punto de control: el proceso de llegadas, el avance de cada pasajero por
//! su máquina de estados y el lazo de despacho de eventos hasta el horizonte.
//!
//! La planificación es cooperativa y de un solo hilo: en cada instante corre
//! exactamente un proceso lógico, y la "concurrencia" entre pasajeros se
//! simula con suspensiones en la adquisición de recursos y en los retardos
//! temporizados. Los eventos simultáneos se reanudan en orden FIFO de
//! inserción, así que dos pasajeros encolados en el mismo recurso se atienden
//! en orden de llegada.

use tracing::{debug, info};

use crate::error::SimulationError;
use crate::metrics::{SimulationMetrics, SojournCollector, SojournRecord};
use crate::passenger::{Passenger, PassengerId, Stage};
use crate::random::Sampler;
use crate::resource::{shortest_queue_index, Resource};
use crate::scheduler::{EventQueue, EventTarget, SimulationClock};

/// Configuración estática de una corrida, leída una sola vez al inicio.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Tasa de llegadas λ, en pasajeros por minuto (debe ser positiva)
    pub arrival_rate: f64,
    /// Capacidad de la revisión de identidad (debe ser positiva)
    pub id_check_capacity: usize,
    /// Tiempo medio de la revisión de identidad, en minutos (exponencial)
    pub id_check_mean: f64,
    /// Cantidad de escáneres personales (debe haber al menos uno)
    pub screening_stations: usize,
    /// Capacidad de cada escáner personal (debe ser positiva)
    pub screening_capacity: usize,
    /// Cota inferior del tiempo de escaneo, en minutos
    pub screening_min: f64,
    /// Cota superior del tiempo de escaneo, en minutos
    pub screening_max: f64,
    /// Horizonte de la simulación, en minutos simulados (no negativo)
    pub horizon: f64,
    /// Semilla del generador aleatorio; `None` usa entropía del sistema
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Verifica que la configuración tenga sentido antes de correr.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Configuration`] describiendo la primera violación
    /// encontrada: tasa, capacidades o media no positivas, banco de escáneres
    /// vacío, intervalo de escaneo invertido o fuera de rango, u horizonte
    /// negativo. Un horizonte de cero es válido: la corrida simplemente no
    /// completa ningún pasajero.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.arrival_rate > 0.0) {
            return Err(SimulationError::Configuration(format!(
                "la tasa de llegadas debe ser > 0 (se recibió {})",
                self.arrival_rate
            )));
        }
        if self.id_check_capacity == 0 {
            return Err(SimulationError::Configuration(
                "la capacidad de la revisión de identidad debe ser > 0".to_string(),
            ));
        }
        if !(self.id_check_mean > 0.0) {
            return Err(SimulationError::Configuration(format!(
                "el tiempo medio de revisión debe ser > 0 (se recibió {})",
                self.id_check_mean
            )));
        }
        if self.screening_stations == 0 {
            return Err(SimulationError::Configuration(
                "debe haber al menos un escáner personal".to_string(),
            ));
        }
        if self.screening_capacity == 0 {
            return Err(SimulationError::Configuration(
                "la capacidad de cada escáner debe ser > 0".to_string(),
            ));
        }
        if !(self.screening_min >= 0.0) {
            return Err(SimulationError::Configuration(format!(
                "la cota inferior de escaneo debe ser >= 0 (se recibió {})",
                self.screening_min
            )));
        }
        if !(self.screening_min < self.screening_max) {
            return Err(SimulationError::Configuration(format!(
                "el intervalo de escaneo debe cumplir lo < hi (se recibió [{}, {}])",
                self.screening_min, self.screening_max
            )));
        }
        if !(self.horizon >= 0.0) {
            return Err(SimulationError::Configuration(format!(
                "el horizonte debe ser >= 0 (se recibió {})",
                self.horizon
            )));
        }
        Ok(())
    }

    /// Tiempo medio entre llegadas, en minutos (1/λ).
    pub fn mean_interarrival(&self) -> f64 {
        1.0 / self.arrival_rate
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        crate::config::default_config()
    }
}

/// Orquestador principal de la simulación del punto de control.
///
/// La `Simulation` es dueña de todo el estado mutable de la corrida: el reloj
/// y la cola de eventos, los recursos de ambas etapas, la tabla de pasajeros,
/// el generador aleatorio y el recolector de permanencias. Como el despacho
/// es de un solo hilo, ningún estado necesita sincronización.
pub struct Simulation {
    /// Configuración estática de la corrida
    config: SimulationConfig,
    /// Reloj de tiempo simulado
    clock: SimulationClock,
    /// Cola de eventos pendientes
    events: EventQueue,
    /// Flujo aleatorio único de la corrida
    sampler: Sampler,
    /// Recurso compartido de la revisión de identidad
    id_check: Resource,
    /// Banco de escáneres personales en paralelo
    scanners: Vec<Resource>,
    /// Tabla de pasajeros creados (el id es el índice)
    passengers: Vec<Passenger>,
    /// Recolector de permanencias completadas
    collector: SojournCollector,
}

impl Simulation {
    /// Construye una simulación validando primero la configuración.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Configuration`] si la configuración es inválida;
    /// en ese caso la simulación no debe ejecutarse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use checkpoint_simulator::{config, Simulation};
    ///
    /// let simulation = Simulation::new(config::default_config()).unwrap();
    /// let metrics = simulation.run();
    /// assert!(metrics.passengers_completed > 0);
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let id_check = Resource::new("Revisión de identidad", config.id_check_capacity);
        let scanners = (1..=config.screening_stations)
            .map(|i| Resource::new(format!("Escáner {}", i), config.screening_capacity))
            .collect();

        Ok(Self {
            config,
            clock: SimulationClock::new(),
            events: EventQueue::new(),
            sampler: Sampler::new(config.seed),
            id_check,
            scanners,
            passengers: Vec::new(),
            collector: SojournCollector::new(),
        })
    }

    /// Ejecuta la corrida completa hasta el horizonte y devuelve las métricas.
    ///
    /// El lazo extrae el evento más próximo, avanza el reloj a su instante y
    /// reanuda el proceso asociado, hasta que no quedan eventos o el próximo
    /// evento cae en o después del horizonte. Los procesos todavía suspendidos
    /// en ese momento quedan abandonados: sus recursos en uso no se liberan y
    /// sus permanencias no se registran (corte limpio de horizonte).
    pub fn run(mut self) -> SimulationMetrics {
        info!(
            "Iniciando simulación: λ={}/min, revisión cap={}, {} escáneres cap={}, horizonte={} min",
            self.config.arrival_rate,
            self.config.id_check_capacity,
            self.config.screening_stations,
            self.config.screening_capacity,
            self.config.horizon
        );

        // Primera llegada: el proceso de llegadas espera un intervalo
        // exponencial antes de crear cada pasajero
        let first_gap = self.sampler.exponential(self.config.mean_interarrival());
        self.events.push(first_gap, EventTarget::Arrival);

        while let Some(next_time) = self.events.peek_time() {
            // Corte estricto: un evento en t >= horizonte no se despacha
            if next_time >= self.config.horizon {
                break;
            }
            let event = self.events.pop().expect("peek garantiza un evento");
            self.clock.advance_to(event.time);

            match event.target {
                EventTarget::Arrival => self.on_arrival(),
                EventTarget::Wake(id) => self.on_wake(id),
            }
        }

        let created = self.passengers.len();
        let completed = self.collector.len();
        info!(
            "Simulación terminada: {} llegados, {} completados, {} truncados",
            created,
            completed,
            created - completed
        );

        SimulationMetrics {
            records: self.collector.into_records(),
            passengers_created: created,
            passengers_completed: completed,
            horizon: self.config.horizon,
        }
    }

    /// Procesa la llegada de un nuevo pasajero y programa la siguiente.
    fn on_arrival(&mut self) {
        let now = self.clock.now();
        let id: PassengerId = self.passengers.len();
        self.passengers.push(Passenger::new(id, now));

        debug!("[LLEGADA] Pasajero {:03} llega en t={:.3} min", id, now);

        // Solicitar la revisión de identidad: si está llena, el pasajero
        // queda en la cola FIFO del recurso y se reanudará al concedérsele
        // el lugar
        if self.id_check.try_acquire(id) {
            self.start_id_check(id);
        } else {
            debug!(
                "[REVISIÓN] Pasajero {:03} espera en cola ({} esperando)",
                id,
                self.id_check.queue_len()
            );
        }

        // Programar la próxima llegada del proceso generador
        let gap = self.sampler.exponential(self.config.mean_interarrival());
        self.events.push(now + gap, EventTarget::Arrival);
    }

    /// Reanuda el proceso del pasajero `id` según la etapa en que se suspendió.
    fn on_wake(&mut self, id: PassengerId) {
        match self.passengers[id].stage {
            // Le concedieron el lugar en la revisión de identidad
            Stage::AwaitingIdCheck => self.start_id_check(id),
            // Terminó su revisión de identidad
            Stage::InIdCheck => self.finish_id_check(id),
            // Le concedieron el lugar en el escáner elegido
            Stage::AwaitingScreening { station } => self.start_screening(id, station),
            // Terminó su escaneo personal
            Stage::InScreening { station } => self.finish_screening(id, station),
            Stage::Done => unreachable!("un pasajero terminado no recibe eventos"),
        }
    }

    /// Comienza el servicio de revisión de identidad del pasajero.
    ///
    /// El lugar ya fue concedido (por `try_acquire` en la llegada o por
    /// `release` de otro pasajero); aquí solo se muestrea la duración y se
    /// programa el fin del servicio.
    fn start_id_check(&mut self, id: PassengerId) {
        self.passengers[id].stage = Stage::InIdCheck;
        let service = self.sampler.exponential(self.config.id_check_mean);
        debug!(
            "[REVISIÓN] Pasajero {:03} inicia revisión en t={:.3} ({:.3} min)",
            id,
            self.clock.now(),
            service
        );
        self.events
            .push(self.clock.now() + service, EventTarget::Wake(id));
    }

    /// Termina la revisión de identidad: libera el recurso y elige escáner.
    fn finish_id_check(&mut self, id: PassengerId) {
        // Liberar el lugar; si alguien esperaba, se le concede ya mismo y se
        // programa su reanudación en el instante actual (retardo cero)
        if let Some(next) = self.id_check.release() {
            self.events.push(self.clock.now(), EventTarget::Wake(next));
        }

        // Política de cola más corta, evaluada una única vez en este instante
        let station = shortest_queue_index(&self.scanners)
            .expect("la validación garantiza al menos un escáner");

        debug!(
            "[ENRUTAMIENTO] Pasajero {:03} elige {} ({} esperando)",
            id,
            self.scanners[station].name(),
            self.scanners[station].queue_len()
        );

        if self.scanners[station].try_acquire(id) {
            self.start_screening(id, station);
        } else {
            self.passengers[id].stage = Stage::AwaitingScreening { station };
        }
    }

    /// Comienza el escaneo personal del pasajero en el escáner `station`.
    fn start_screening(&mut self, id: PassengerId, station: usize) {
        self.passengers[id].stage = Stage::InScreening { station };
        let service = self
            .sampler
            .uniform(self.config.screening_min, self.config.screening_max);
        debug!(
            "[ESCÁNER] Pasajero {:03} inicia escaneo en {} en t={:.3} ({:.3} min)",
            id,
            self.scanners[station].name(),
            self.clock.now(),
            service
        );
        self.events
            .push(self.clock.now() + service, EventTarget::Wake(id));
    }

    /// Termina el escaneo: libera el escáner y registra la permanencia.
    fn finish_screening(&mut self, id: PassengerId, station: usize) {
        if let Some(next) = self.scanners[station].release() {
            self.events.push(self.clock.now(), EventTarget::Wake(next));
        }

        let now = self.clock.now();
        let passenger = &mut self.passengers[id];
        passenger.stage = Stage::Done;

        let sojourn = passenger.sojourn_at(now);
        debug!(
            "[COMPLETADO] Pasajero {:03} sale en t={:.3} (permanencia: {:.3} min)",
            id, now, sojourn
        );

        self.collector.record(SojournRecord {
            passenger_id: id,
            arrival_time: passenger.arrival_time,
            completion_time: now,
            sojourn,
        });
    }
}
