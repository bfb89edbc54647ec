//! Menubar icon images: 16x16 editor logos as base64 PNG data.

pub const LOGO_STABLE: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAABmJLR0QA/wD/AP+gvaeTAAACPElEQVQ4jY1SXUiTYRR+3u9ni1rJsrRoNqeyizaURGjDBCEJIutCKOimRVJUskLowgjBi8KCoBC8iYgR/YFSWxebs+giBkmlNpAIpFZZwowYTvbT93e6kG/7PhP0wMP7ct73OZznOYfHOsMzMLY17z2c2Hnmeput2v1+aSqWBQC2HnL9tXhNqsjPaERb3D4fAKCwMB/OvY0H1yxQMxD3/pS4KQJEgODe5y8/amqaW761C6uRd/ePt85JSBKRCCKACKShDPDV3ObgkzbcHi7Y+uIXAHA6eXtf7NgPiRJQwUEjQCPYQMMgEAjQwYSbk5OKaG0GAEuxELZF7gSU9hOBLPFDhmZUO4+jmcFD0YbRrGb0jtk7zlYsHTj3RhEtjcu6FBmpzyI22gDGIDA2W0nF/elbXQsA0DBiLsBlXt1dVF70+IR8/iU0AsCLcHkAxkH4NvNMWZzz6GQAZg80XbOjV6JPCUI2A10vtjmAPa0MEwmLyVkygyEYtQqCnFBUakH6O1DbJKPCLpY0aspXazLaURzpTwFA3eMVEngmvVZUagEAvsrxCOGrlZY/81dKY2N8XXFv56zl4vPjAJie18E2XRptzKn8BwtHJ6Whrqd6ZbEnEpB3OEPG7rlc5p7T09xtmoLhpJWLJJwOHVScTbHyfhBctfWmP/ri/EcGAOX+qXHxy4QfRLJurlGBJstpbjWiMeQH598hOeaFqmWhaqUp/f39K5KO3PCvxS9HZ+8uoTs0XTX48eGGI5ddevofxGALn06FJn0AAAAASUVORK5CYII=";

pub const LOGO_INSIDERS: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAABmJLR0QA/wD/AP+gvaeTAAAB+ElEQVQ4jY2SX0hTURzHP+fuThzzTwkOp2klk2UjAl9KfFkQET0V1IOtFwvmQ6w3aYmzEY4ISqJmOSkIEiHsqYyIpB6siCBZpVgRJUGKGdXSuG7cu9NDepvuYv5eDuf3+34/55zf+dlYa/REi4pLi0vcp0PhrKPwdebVWw1ArMmciNaAPo4ut3rq6ycRQsl+T12cfTAS+z+gL+IDmQRUVFnj2fQXAIBhfFEWZYql+VqkCeQYoFrWbbYqhXh7A3cua9zoCix7Um/HQbLyyXJHdmElQ6HSFQdRQNm6fm51X8fvL+TqqVYUBnN0KVC9HD07mw8YfroHIzsKgKOghdCBb6T1XqQECSCfk1qoIhh9b/UKhSuD8wyMNJLJDAFgtzmp3SgRKkx97WPK3kTb+d+WPWCpeT6fzrNkJ+lM/2JeUFEOW+pmGI+u+lMKiaAdt34Pb/UoL98MMa91m1WnI0LzpWFCgZJVbuB6iGAvQkBtZTM3E+3MaWFToSp+djd+5sLJ7dYAIY4DOsgjBGP7uf8hTaDtHD/mjpkqQSl11UmioQ0rASJnlXn4ROcu3K5H5n7so9ezs2HCnET+TWC+GaD1zGMmp3cg0K3KUjemrUc4N07EXvDu0zaQGoZuHmT8/BWfGbhr2RfrCB9e79znr9h8u6erqOVQ+VL6D386oGnQSlf0AAAAAElFTkSuQmCC";
