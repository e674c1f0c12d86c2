use stoat_res::{
    config::Config,
    procedures::resolution::{self, Resolution},
    structures::term::Term,
};

fn classical() -> Config {
    Config {
        multi_pair_elimination: false,
        discard_tautologies: true,
        ..Config::default()
    }
}

fn resolvent(left: &Term, right: &Term, config: &Config) -> Term {
    match resolution::resolve(left, right, config) {
        Resolution::Resolvent(term) => term,
        other => panic!("expected a resolvent, found {other:?}"),
    }
}

mod pairs {
    use super::*;

    #[test]
    fn no_complementary_pair_no_resolvent() {
        let left = Term::literal("p") | Term::literal("q");
        let right = Term::literal("r") | Term::literal("s");

        assert_eq!(
            resolution::resolve(&left, &right, &Config::default()),
            Resolution::NoPair
        );
    }

    #[test]
    fn a_shared_literal_is_not_a_complementary_pair() {
        let left = Term::literal("p") | Term::literal("q");
        let right = Term::literal("p") | Term::literal("r");

        assert_eq!(
            resolution::resolve(&left, &right, &Config::default()),
            Resolution::NoPair
        );
    }

    #[test]
    fn a_single_pair_is_eliminated() {
        let left = Term::literal("p") | Term::literal("q");
        let right = !Term::literal("p") | Term::literal("r");

        let derived = resolvent(&left, &right, &Config::default());
        assert_eq!(derived.to_string(), "q∨r");
    }

    #[test]
    fn complementary_units_resolve_to_the_empty_clause() {
        let p = Term::literal("p");

        let derived = resolvent(&p, &p.negate(), &Config::default());
        assert!(derived.is_empty_clause());
    }

    #[test]
    fn survivors_shared_between_premises_are_merged() {
        let left = Term::literal("p") | Term::literal("q");
        let right = !Term::literal("p") | Term::literal("q");

        let derived = resolvent(&left, &right, &Config::default());
        assert_eq!(derived.to_string(), "q");
    }

    #[test]
    fn survivor_order_is_left_premise_then_right() {
        let left = Term::literal("q") | Term::literal("p");
        let right = !Term::literal("p") | Term::literal("a");

        let derived = resolvent(&left, &right, &Config::default());
        assert_eq!(derived.to_string(), "q∨a");
    }
}

mod policies {
    use super::*;

    // Two complementary pairs across the premises, p against ¬(p) and q against ¬(q).
    fn annihilating_pair() -> (Term, Term) {
        let left = Term::literal("p") | Term::literal("q");
        let right = !Term::literal("p") | !Term::literal("q");

        (left, right)
    }

    #[test]
    fn multi_pair_elimination_annihilates() {
        let (left, right) = annihilating_pair();

        let derived = resolvent(&left, &right, &Config::default());
        assert!(derived.is_empty_clause());
    }

    #[test]
    fn multi_pair_elimination_outruns_the_tautology_check() {
        let (left, right) = annihilating_pair();
        let config = Config {
            discard_tautologies: true,
            ..Config::default()
        };

        // Both pairs go at elimination, so no literals remain to make a tautology.
        let derived = resolvent(&left, &right, &config);
        assert!(derived.is_empty_clause());
    }

    #[test]
    fn single_pair_elimination_leaves_a_tautology() {
        let (left, right) = annihilating_pair();

        assert_eq!(
            resolution::resolve(&left, &right, &classical()),
            Resolution::Tautology
        );
    }

    #[test]
    fn single_pair_elimination_with_stripping_annihilates_by_steps() {
        let (left, right) = annihilating_pair();
        let config = Config {
            multi_pair_elimination: false,
            ..Config::default()
        };

        // One pair goes at elimination, the other is stripped from the resolvent.
        let derived = resolvent(&left, &right, &config);
        assert!(derived.is_empty_clause());
    }

    #[test]
    fn literals_clear_of_any_pair_survive_every_policy() {
        let left = Term::literal("p") | Term::literal("q") | Term::literal("r");
        let right = !Term::literal("p") | !Term::literal("q") | Term::literal("s");

        for multi_pair_elimination in [true, false] {
            for discard_tautologies in [true, false] {
                let config = Config {
                    multi_pair_elimination,
                    discard_tautologies,
                    clause_limit: None,
                };

                match resolution::resolve(&left, &right, &config) {
                    Resolution::Resolvent(derived) => {
                        assert_eq!(derived.to_string(), "r∨s");
                        assert!(multi_pair_elimination || !discard_tautologies);
                    }

                    Resolution::Tautology => {
                        assert!(!multi_pair_elimination && discard_tautologies);
                    }

                    Resolution::NoPair => panic!("complementary pairs are present"),
                }
            }
        }
    }

    #[test]
    fn elimination_is_oblivious_to_literal_order() {
        let left = Term::literal("q") | Term::literal("p");
        let right = !Term::literal("p") | !Term::literal("q");

        let derived = resolvent(&left, &right, &Config::default());
        assert!(derived.is_empty_clause());
    }
}

mod corners {
    use super::*;

    #[test]
    fn the_empty_clause_resolves_with_nothing() {
        let empty = Term::empty_clause();
        let unit = Term::literal("p");

        assert_eq!(
            resolution::resolve(&empty, &unit, &Config::default()),
            Resolution::NoPair
        );
        assert_eq!(
            resolution::resolve(&empty, &empty, &Config::default()),
            Resolution::NoPair
        );
    }

    #[test]
    fn duplicate_literals_are_eliminated_together() {
        let left = Term::literal("p") | Term::literal("p");
        let right = !Term::literal("p");

        let derived = resolvent(&left, &right, &Config::default());
        assert!(derived.is_empty_clause());
    }

    #[test]
    fn a_tautology_against_its_own_copy_annihilates() {
        // The function reads its arguments as separate premises, so a clause may be resolved
        // against a copy of itself, a pairing the saturation procedure never makes.
        let tautology = Term::literal("p") | !Term::literal("p");

        let derived = resolvent(&tautology, &tautology.clone(), &Config::default());
        assert!(derived.is_empty_clause());
    }
}
