/// English month names, indexed by `month0` (0 = January).
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month0: usize) -> &'static str {
    MONTHS[month0 % 12]
}
