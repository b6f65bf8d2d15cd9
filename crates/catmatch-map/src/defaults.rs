/// Built-in Spanish label to English slug pairs for network incident
/// categories.
///
/// Accented and unaccented spellings are listed separately because lookups
/// do not fold diacritics.
pub const DEFAULT_MAPPING: &[(&str, &str)] = &[
    ("Temperatura", "temperature"),
    ("Posible Temperatura", "temperature"),
    ("Energía Cliente", "energy_client"),
    ("Energia Cliente", "energy_client"),
    ("Intermitencia", "intermittency"),
    ("Puerto LAN", "lan_port"),
    ("Corte de Fibra", "fiber_cut"),
    ("Corte Fibra", "fiber_cut"),
    ("Ruta Secundaria Abajo", "secondary_route_down"),
    ("Ruta Secundaria Down", "secondary_route_down"),
    ("Posible Corte de Energía", "energy_client"),
    ("Posible Corte de Energia", "energy_client"),
    ("Posible Corte / Energía", "energy_client"),
    ("Posible Falla de Energía", "energy_client"),
    ("Servicio Ok", "service_ok"),
    ("No determinado", "undetermined"),
    ("Suspensión / Baja Lógica", "logical_suspension"),
    ("SFP Dañado", "sfp_damaged"),
    ("Sin Información", "no_information"),
    ("Posible Corte Fibra", "fiber_cut"),
    ("Posible Corte de Fibra Sin Demarcador", "fiber_cut"),
    ("Corte en ENNI", "fiber_cut"),
    ("Posible Corte en ENNI", "fiber_cut"),
    ("Puerto Inhibido", "port_inhibited"),
    ("Degradación de Servicio", "service_degradation"),
    ("Falla Anillo / Bus", "ring_bus_failure"),
    ("Interfaz Intermitente", "intermittency"),
];
