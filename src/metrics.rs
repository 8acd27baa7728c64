//! # Módulo de Métricas y Reportes
//!
//! Este módulo se encarga de recolectar las permanencias de los pasajeros que
//! completan ambas etapas, calcular el promedio y generar reportes de los
//! resultados de la simulación. Los pasajeros truncados por el horizonte no
//! se registran y quedan excluidos del promedio.

use crate::error::SimulationError;
use crate::passenger::PassengerId;

/// Permanencia de un pasajero que completó ambas etapas.
///
/// Inmutable una vez registrada: la permanencia es el tiempo total de espera
/// más servicio, desde la llegada hasta la salida del escáner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SojournRecord {
    /// Identificador del pasajero
    pub passenger_id: PassengerId,
    /// Instante simulado de llegada al sistema (minutos)
    pub arrival_time: f64,
    /// Instante simulado de salida del sistema (minutos)
    pub completion_time: f64,
    /// Permanencia total en el sistema (minutos)
    pub sojourn: f64,
}

/// Recolector de permanencias completadas.
///
/// Es propiedad de la simulación y lo muta únicamente el proceso activo en
/// cada instante, por lo que no necesita sincronización.
#[derive(Debug, Default)]
pub struct SojournCollector {
    records: Vec<SojournRecord>,
}

impl SojournCollector {
    /// Crea un recolector vacío.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Registra la permanencia de un pasajero completado.
    pub fn record(&mut self, record: SojournRecord) {
        self.records.push(record);
    }

    /// Permanencias registradas, en orden de finalización.
    pub fn records(&self) -> &[SojournRecord] {
        &self.records
    }

    /// Cantidad de pasajeros completados.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Indica si ningún pasajero completó ambas etapas.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Promedio aritmético de las permanencias registradas, en minutos.
    ///
    /// # Errors
    ///
    /// Devuelve [`SimulationError::EmptyResult`] si no hay permanencias
    /// registradas: el promedio no está definido y nunca se fabrica un 0.0.
    pub fn mean(&self) -> Result<f64, SimulationError> {
        if self.records.is_empty() {
            return Err(SimulationError::EmptyResult);
        }
        let sum: f64 = self.records.iter().map(|r| r.sojourn).sum();
        Ok(sum / self.records.len() as f64)
    }

    /// Consume el recolector y devuelve las permanencias registradas.
    pub fn into_records(self) -> Vec<SojournRecord> {
        self.records
    }
}

/// Métricas agregadas de una corrida completa de la simulación.
#[derive(Debug, Clone)]
pub struct SimulationMetrics {
    /// Permanencias individuales en orden de finalización
    pub records: Vec<SojournRecord>,
    /// Pasajeros que llegaron al sistema antes del horizonte
    pub passengers_created: usize,
    /// Pasajeros que completaron ambas etapas antes del horizonte
    pub passengers_completed: usize,
    /// Horizonte de la corrida (minutos simulados)
    pub horizon: f64,
}

impl SimulationMetrics {
    /// Promedio de permanencia en el sistema, en minutos.
    ///
    /// # Errors
    ///
    /// [`SimulationError::EmptyResult`] si ningún pasajero completó ambas
    /// etapas antes del horizonte.
    pub fn mean_sojourn(&self) -> Result<f64, SimulationError> {
        if self.records.is_empty() {
            return Err(SimulationError::EmptyResult);
        }
        let sum: f64 = self.records.iter().map(|r| r.sojourn).sum();
        Ok(sum / self.records.len() as f64)
    }

    /// Permanencia mínima observada, si hubo pasajeros completados.
    pub fn min_sojourn(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.sojourn)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Permanencia máxima observada, si hubo pasajeros completados.
    pub fn max_sojourn(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.sojourn)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Pasajeros abandonados a medio camino al alcanzarse el horizonte.
    pub fn passengers_abandoned(&self) -> usize {
        self.passengers_created - self.passengers_completed
    }

    /// Pasajeros completados por minuto simulado.
    pub fn throughput(&self) -> f64 {
        if self.horizon > 0.0 {
            self.passengers_completed as f64 / self.horizon
        } else {
            0.0
        }
    }
}

/// Generador de reportes para las métricas de la simulación.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Crea una nueva instancia del generador de reportes.
    pub fn new() -> Self {
        Self
    }

    /// Genera un reporte de texto con los resultados de la simulación.
    ///
    /// # Errors
    ///
    /// Propaga [`SimulationError::EmptyResult`] si ningún pasajero completó
    /// ambas etapas: sin promedio definido no hay reporte que generar.
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> Result<String, SimulationError> {
        let mean = metrics.mean_sojourn()?;
        let mut report = String::new();

        report.push_str("\n=== RESULTADOS DE LA SIMULACIÓN ===\n\n");
        report.push_str(&format!(
            "Horizonte simulado:       {} min\n",
            Self::format_minutes(metrics.horizon)
        ));
        report.push_str(&format!(
            "Pasajeros llegados:       {}\n",
            metrics.passengers_created
        ));
        report.push_str(&format!(
            "Pasajeros completados:    {}\n",
            metrics.passengers_completed
        ));
        report.push_str(&format!(
            "Pasajeros truncados:      {}\n",
            metrics.passengers_abandoned()
        ));
        report.push_str(&format!(
            "Throughput:               {:.3} pasajeros/min\n",
            metrics.throughput()
        ));

        report.push_str("\n=== PERMANENCIA EN EL SISTEMA ===\n");
        report.push_str(&format!(
            "Promedio: {} min\n",
            Self::format_minutes(mean)
        ));
        if let (Some(min), Some(max)) = (metrics.min_sojourn(), metrics.max_sojourn()) {
            report.push_str(&format!("Mínima:   {} min\n", Self::format_minutes(min)));
            report.push_str(&format!("Máxima:   {} min\n", Self::format_minutes(max)));
        }

        Ok(report)
    }

    /// Genera un reporte por pasajero en formato CSV.
    ///
    /// Columnas: id, llegada, salida y permanencia en minutos, en orden de
    /// finalización.
    pub fn generate_csv_report(&self, metrics: &SimulationMetrics) -> String {
        let mut csv = String::new();
        csv.push_str("PassengerID,ArrivalMin,CompletionMin,SojournMin\n");

        for record in &metrics.records {
            csv.push_str(&format!(
                "{},{:.3},{:.3},{:.3}\n",
                record.passenger_id, record.arrival_time, record.completion_time, record.sojourn
            ));
        }

        csv
    }

    /// Formatea una cantidad de minutos con dos decimales.
    pub fn format_minutes(minutes: f64) -> String {
        format!("{:.2}", minutes)
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: PassengerId, arrival: f64, completion: f64) -> SojournRecord {
        SojournRecord {
            passenger_id: id,
            arrival_time: arrival,
            completion_time: completion,
            sojourn: completion - arrival,
        }
    }

    #[test]
    fn test_empty_collector_mean_is_an_error() {
        let collector = SojournCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.mean(), Err(SimulationError::EmptyResult));
    }

    #[test]
    fn test_mean_over_recorded_sojourns() {
        let mut collector = SojournCollector::new();
        collector.record(record(0, 0.0, 2.0));
        collector.record(record(1, 1.0, 5.0));

        assert_eq!(collector.len(), 2);
        // (2.0 + 4.0) / 2
        assert_eq!(collector.mean(), Ok(3.0));
    }

    #[test]
    fn test_metrics_aggregates() {
        let metrics = SimulationMetrics {
            records: vec![record(0, 0.0, 1.5), record(1, 0.5, 3.5), record(2, 1.0, 2.0)],
            passengers_created: 5,
            passengers_completed: 3,
            horizon: 10.0,
        };

        assert_eq!(metrics.passengers_abandoned(), 2);
        assert_eq!(metrics.min_sojourn(), Some(1.0));
        assert_eq!(metrics.max_sojourn(), Some(3.0));
        assert_eq!(metrics.throughput(), 0.3);
        assert!((metrics.mean_sojourn().unwrap() - 1.833_333).abs() < 1e-5);
    }

    #[test]
    fn test_empty_metrics_report_is_an_error() {
        let metrics = SimulationMetrics {
            records: Vec::new(),
            passengers_created: 0,
            passengers_completed: 0,
            horizon: 0.0,
        };

        assert_eq!(metrics.mean_sojourn(), Err(SimulationError::EmptyResult));

        let calculator = MetricsCalculator::new();
        assert_eq!(
            calculator.generate_report(&metrics),
            Err(SimulationError::EmptyResult)
        );
    }

    #[test]
    fn test_csv_report_one_line_per_passenger() {
        let metrics = SimulationMetrics {
            records: vec![record(0, 0.0, 1.0), record(1, 0.5, 2.0)],
            passengers_created: 2,
            passengers_completed: 2,
            horizon: 5.0,
        };

        let calculator = MetricsCalculator::new();
        let csv = calculator.generate_csv_report(&metrics);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3); // 1 encabezado + 2 pasajeros
        assert!(lines[0].contains("PassengerID"));
        assert!(lines[1].starts_with("0,"));
        assert!(lines[2].starts_with("1,"));
    }

    #[test]
    fn test_format_minutes_two_decimals() {
        assert_eq!(MetricsCalculator::format_minutes(1.236), "1.24");
        assert_eq!(MetricsCalculator::format_minutes(0.5), "0.50");
        assert_eq!(MetricsCalculator::format_minutes(1000.0), "1000.00");
    }
}
