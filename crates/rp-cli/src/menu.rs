//! Interactive menu choices.

use rp_planner::RequestKind;

pub const MENU: &str = "\n===== Route Planning Analysis Tool =====\n\
1. Plan Route\n\
2. Plan Restricted Route (Avoid Nodes/Segments)\n\
3. Plan Environmentally Friendly Route (driving + walking)\n\
4. Exit\n\
Enter your choice: ";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Choice {
    Plan(RequestKind),
    Exit,
}

impl Choice {
    /// `None` for anything other than `1`–`4`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Plan(RequestKind::Driving)),
            "2" => Some(Choice::Plan(RequestKind::Restricted)),
            "3" => Some(Choice::Plan(RequestKind::DrivingWalking)),
            "4" => Some(Choice::Exit),
            _ => None,
        }
    }
}
