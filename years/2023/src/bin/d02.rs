use lib::prelude::*;

/// The number of cubes of each color in the bag.
const LIMITS: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u64,
    green: u64,
    blue: u64,
}

impl Cubes {
    fn get_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        }
    }

    /// Test if every color fits within the given limits.
    fn fits(&self, limits: &Cubes) -> bool {
        self.red <= limits.red && self.green <= limits.green && self.blue <= limits.blue
    }

    /// Per-color maximum of two sets of cubes.
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// Product of the three counts, or `None` if it does not fit.
    fn power(&self) -> Option<u64> {
        self.red.checked_mul(self.green)?.checked_mul(self.blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

lib::from_input! {
    |value: &str| -> Color {
        Ok(match value {
            "red" => Color::Red,
            "green" => Color::Green,
            "blue" => Color::Blue,
            other => bail!("unknown color `{other}`"),
        })
    }
}

#[derive(Debug)]
struct Game {
    id: u64,
    rounds: Vec<Cubes>,
}

impl Game {
    /// Parse a line of the form `Game <id>: <count> <color>, ...; ...`.
    fn parse(line: IStr) -> Result<Self, IStrError> {
        let (head, rest) = line.split_pair(": ")?;
        let (tag, mut id) = head.split_pair(" ")?;

        if tag.as_data() != b"Game" {
            return Err(IStrError::condition(
                tag.span(),
                "record starts with `Game`",
                Some(Custom::BStr(tag.as_bstr())),
            ));
        }

        let id = id.next::<u64>()?;
        let mut rounds = Vec::new();

        for round in rest.split_str("; ") {
            let mut cubes = Cubes::default();

            for pull in round.split_str(", ") {
                let (mut count, mut color) = pull.split_pair(" ")?;
                let count = count.next::<u64>()?;
                let color = color.next::<Color>()?;
                let slot = cubes.get_mut(color);
                *slot = (*slot).max(count);
            }

            rounds.push(cubes);
        }

        Ok(Game { id, rounds })
    }

    /// The fewest cubes of each color which makes the game possible.
    fn minimum(&self) -> Cubes {
        self.rounds
            .iter()
            .fold(Cubes::default(), |acc, round| acc.max(*round))
    }
}

lib::entry!(input = "d02.txt", solve);

fn solve(input: IStr) -> Result<(u64, u64)> {
    let lines = input.lines();
    Ok((part_one(&lines, &LIMITS)?, part_two(&lines)?))
}

/// Sum the positions of every game which is possible with the given limits.
///
/// Games are numbered by their position in the input, starting at 1. The id
/// written in the record does not count towards the sum.
fn part_one(lines: &[IStr], limits: &Cubes) -> Result<u64> {
    let mut total = 0;

    for (n, line) in (1..).zip(lines) {
        let game = Game::parse(*line)?;

        if game.id != n {
            log::debug!("game {} is at position {n}", game.id);
        }

        if game.rounds.iter().all(|round| round.fits(limits)) {
            total += n;
        }
    }

    Ok(total)
}

fn part_two(lines: &[IStr]) -> Result<u64> {
    let mut total = 0u64;

    for line in lines {
        let power = Game::parse(*line)?.minimum().power();

        let Some(sum) = power.and_then(|power| total.checked_add(power)) else {
            return Err(IStrError::condition(line.span(), "power fits in 64 bits", None).into());
        };

        total = sum;
    }

    Ok(total)
}
