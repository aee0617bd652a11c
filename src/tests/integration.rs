#[cfg(test)]
mod integration_tests {

    use crate::{Chart, ChartSub, ELL, PatternRule, Romy, system};
    use std::borrow::Cow;

    #[test]
    fn pipeline_steps_compose_sequentially() {
        // The second step sees the first step's output, not the input.
        let chart = Chart::builder().add("b", "c").unwrap().build();
        let romy = Romy::builder()
            .add_sub(PatternRule::new("a", "b").unwrap())
            .add_sub(ChartSub::new(chart))
            .build();
        assert_eq!(romy.romanize("aaa"), "ccc");
    }

    #[test]
    fn untouched_text_is_zero_copy_end_to_end() {
        let input = "nothing matches anywhere";
        let out = system::greek().romanize(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let romy = Romy::builder().lang(ELL).build();
        let input = "αβγ";
        let out = romy.romanize(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn greek_sentence() {
        assert_eq!(
            system::greek().romanize("Η Ελλάδα και η Ρόδος."),
            "I Ellada kai i Rhodos."
        );
    }

    #[test]
    fn russian_mixed_script_sentence() {
        assert_eq!(
            system::russian().romanize("Пушкин wrote Евгений Онегин"),
            "Pushkin wrote Evgeniy Onegin"
        );
    }

    #[test]
    fn owned_input_stays_owned() {
        let romy = system::russian();
        let out = romy.romanize(String::from("Москва"));
        assert_eq!(out, "Moskva");
        let untouched = romy.romanize(String::from("latin"));
        assert_eq!(untouched, "latin");
    }

    #[test]
    fn deletion_mid_pipeline() {
        let chart = Chart::builder()
            .add("-", "")
            .unwrap()
            .add("α", "a")
            .unwrap()
            .build();
        let romy = Romy::builder().lang(ELL).add_sub(ChartSub::new(chart)).build();
        assert_eq!(romy.romanize("α-α-α"), "aaa");
    }
}
