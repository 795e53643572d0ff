use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub atomic_number: u32,
    pub symbol: &'static str,
    /// Mass of the most naturally abundant isotope, in daltons.
    pub most_common_isotope_mass: f64,
}

const fn element(atomic_number: u32, symbol: &'static str, mass: f64) -> ElementData {
    ElementData {
        atomic_number,
        symbol,
        most_common_isotope_mass: mass,
    }
}

static ELEMENTS: [ElementData; 118] = [
    element(1, "H", 1.007825032),
    element(2, "He", 4.002603254),
    element(3, "Li", 7.01600455),
    element(4, "Be", 9.0121822),
    element(5, "B", 11.0093054),
    element(6, "C", 12.0),
    element(7, "N", 14.003074004),
    element(8, "O", 15.994914620),
    element(9, "F", 18.998403220),
    element(10, "Ne", 19.992440175),
    element(11, "Na", 22.989769281),
    element(12, "Mg", 23.985041700),
    element(13, "Al", 26.98153863),
    element(14, "Si", 27.976926532),
    element(15, "P", 30.97376163),
    element(16, "S", 31.972071),
    element(17, "Cl", 34.96885268),
    element(18, "Ar", 39.962383123),
    element(19, "K", 38.96370668),
    element(20, "Ca", 39.96259098),
    element(21, "Sc", 44.9559119),
    element(22, "Ti", 47.9479463),
    element(23, "V", 50.9439595),
    element(24, "Cr", 51.9405075),
    element(25, "Mn", 54.9380451),
    element(26, "Fe", 55.9349375),
    element(27, "Co", 58.933195),
    element(28, "Ni", 57.9353429),
    element(29, "Cu", 62.9295975),
    element(30, "Zn", 63.9291422),
    element(31, "Ga", 68.9255736),
    element(32, "Ge", 73.9211778),
    element(33, "As", 74.9215965),
    element(34, "Se", 79.9165213),
    element(35, "Br", 78.9183371),
    element(36, "Kr", 83.911507),
    element(37, "Rb", 84.911789738),
    element(38, "Sr", 87.9056121),
    element(39, "Y", 88.9058483),
    element(40, "Zr", 89.9047044),
    element(41, "Nb", 92.9063781),
    element(42, "Mo", 97.9054082),
    element(43, "Tc", 97.907216),
    element(44, "Ru", 101.9043493),
    element(45, "Rh", 102.905504),
    element(46, "Pd", 105.903486),
    element(47, "Ag", 106.905097),
    element(48, "Cd", 113.9033585),
    element(49, "In", 114.903878),
    element(50, "Sn", 119.9021947),
    element(51, "Sb", 120.9038157),
    element(52, "Te", 129.9062244),
    element(53, "I", 126.904473),
    element(54, "Xe", 131.9041535),
    element(55, "Cs", 132.905451933),
    element(56, "Ba", 137.9052472),
    element(57, "La", 138.9063533),
    element(58, "Ce", 139.9054387),
    element(59, "Pr", 140.9076528),
    element(60, "Nd", 141.9077233),
    element(61, "Pm", 144.912749),
    element(62, "Sm", 151.9197324),
    element(63, "Eu", 152.9212303),
    element(64, "Gd", 157.9241039),
    element(65, "Tb", 158.9253468),
    element(66, "Dy", 163.9291748),
    element(67, "Ho", 164.9303221),
    element(68, "Er", 165.9302931),
    element(69, "Tm", 168.9342133),
    element(70, "Yb", 173.9388621),
    element(71, "Lu", 174.9407718),
    element(72, "Hf", 179.94655),
    element(73, "Ta", 180.9479958),
    element(74, "W", 183.9509312),
    element(75, "Re", 186.9557531),
    element(76, "Os", 191.9614807),
    element(77, "Ir", 192.9629264),
    element(78, "Pt", 194.9647911),
    element(79, "Au", 196.9665687),
    element(80, "Hg", 201.970643),
    element(81, "Tl", 204.9744275),
    element(82, "Pb", 207.9766521),
    element(83, "Bi", 208.9803987),
    element(84, "Po", 208.9824304),
    element(85, "At", 209.987148),
    element(86, "Rn", 222.0175777),
    element(87, "Fr", 223.0197359),
    element(88, "Ra", 226.0254098),
    element(89, "Ac", 227.0277521),
    element(90, "Th", 232.0380553),
    element(91, "Pa", 231.035884),
    element(92, "U", 238.0507882),
    element(93, "Np", 237.0481734),
    element(94, "Pu", 244.064204),
    element(95, "Am", 243.0613811),
    element(96, "Cm", 247.070354),
    element(97, "Bk", 247.070307),
    element(98, "Cf", 251.079587),
    element(99, "Es", 252.08298),
    element(100, "Fm", 257.095105),
    element(101, "Md", 258.098431),
    element(102, "No", 259.10103),
    element(103, "Lr", 262.10963),
    element(104, "Rf", 267.12179),
    element(105, "Db", 268.12567),
    element(106, "Sg", 271.13393),
    element(107, "Bh", 272.13826),
    element(108, "Hs", 270.13429),
    element(109, "Mt", 276.15159),
    element(110, "Ds", 281.16451),
    element(111, "Rg", 280.16514),
    element(112, "Cn", 285.17712),
    element(113, "Nh", 284.17873),
    element(114, "Fl", 289.19042),
    element(115, "Mc", 288.19274),
    element(116, "Lv", 293.20449),
    element(117, "Ts", 292.20746),
    element(118, "Og", 294.21392),
];

lazy_static::lazy_static! {
    static ref BY_SYMBOL: HashMap<&'static str, &'static ElementData> =
        ELEMENTS.iter().map(|e| (e.symbol, e)).collect();
}

pub fn by_symbol(symbol: &str) -> Option<&'static ElementData> {
    BY_SYMBOL.get(symbol).copied()
}

pub fn by_atomic_number(atomic_number: u32) -> Option<&'static ElementData> {
    let idx = usize::try_from(atomic_number).ok()?.checked_sub(1)?;
    ELEMENTS.get(idx)
}
